//! Placeholder content used whenever real extraction cannot complete.
//!
//! Output depends only on the shape of the URL, so the same URL always
//! produces the same placeholder.

use percent_encoding::percent_decode_str;
use url::Url;

use crate::client::types::ExtractionResult;

const WIKIPEDIA_MARKER: &str = "wikipedia.org/wiki/";
const WIKIPEDIA_DEFAULT_TITLE: &str = "Wikipedia Article";
const UNKNOWN_HOST_LABEL: &str = "unknown source";

/// Build placeholder content for `url`. Never fails, whatever the input.
pub fn fallback(url: &str) -> ExtractionResult {
    match wikipedia_title(url) {
        Some(title) => ExtractionResult {
            content: wikipedia_placeholder(&title),
            title,
            source_url: url.to_string(),
        },
        None => {
            let host = hostname_label(url);
            ExtractionResult {
                content: generic_placeholder(&host),
                title: format!("Content from {host}"),
                source_url: url.to_string(),
            }
        }
    }
}

/// `Some(title)` when `url` is a Wikipedia article link, `None` otherwise.
fn wikipedia_title(url: &str) -> Option<String> {
    let start = url.find(WIKIPEDIA_MARKER)? + WIKIPEDIA_MARKER.len();
    let rest = &url[start..];
    let segment = rest.split(['#', '?']).next().unwrap_or_default();

    let title = percent_decode_str(segment)
        .decode_utf8_lossy()
        .replace('_', " ")
        .trim()
        .to_string();

    if title.is_empty() {
        Some(WIKIPEDIA_DEFAULT_TITLE.to_string())
    } else {
        Some(title)
    }
}

/// Hostname of `url`, or a best-effort label when it does not parse.
fn hostname_label(url: &str) -> String {
    if let Ok(parsed) = Url::parse(url)
        && let Some(host) = parsed.host_str()
    {
        return host.to_string();
    }

    let without_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    let authority = without_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    let host = authority.rsplit('@').next().unwrap_or_default().trim();

    if host.is_empty() {
        UNKNOWN_HOST_LABEL.to_string()
    } else {
        host.to_string()
    }
}

fn wikipedia_placeholder(title: &str) -> String {
    format!(
        "{title}\n\n\
         This is placeholder text for the Wikipedia article \"{title}\". The article \
         could not be extracted right now because the content service is temporarily \
         running in a degraded mode.\n\n\
         Wikipedia articles usually open with a short summary of the subject, followed \
         by sections covering its history, key ideas and related topics. Once extraction \
         is available again, the full text of \"{title}\" will appear here in place of \
         this notice.\n\n\
         In the meantime you can use this passage to warm up, check your reading pace \
         or try out different display settings before coming back to the real article."
    )
}

fn generic_placeholder(host: &str) -> String {
    format!(
        "Content from {host}\n\n\
         The article from {host} could not be extracted right now. The content service \
         may be busy or the page may be temporarily unavailable, so this placeholder is \
         shown instead of the original text.\n\n\
         You can still make use of this passage while extraction is unavailable:\n\n\
         - Testing your reading speed with a short, predictable text\n\
         - Practicing techniques such as chunking and reducing subvocalization\n\
         - Adjusting font size, pacing and other display settings\n\n\
         Try loading the page again later to read the full article from {host}."
    )
}
