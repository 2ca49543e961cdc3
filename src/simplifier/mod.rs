//! Conservative clean-up of text returned by the extraction backend.
//!
//! Only whitespace normalisation and a short list of literal boilerplate
//! phrases are handled here. Anything smarter belongs to the backend.

use regex::Regex;
use std::sync::LazyLock;

static LINE_EDGE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]*\n[ \t]*").unwrap());

static SPACE_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());

static BLANK_LINES_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

static DISQUS_PREAMBLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^please enable javascript to view the comments powered by disqus\.\s*")
        .unwrap()
});

static BOILERPLATE_PHRASE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:advertisement|sponsored content|click here to subscribe)\b").unwrap()
});

/// Normalise whitespace and strip known boilerplate phrases.
///
/// Runs of spaces/tabs become one space (and disappear next to line breaks),
/// three or more newlines become a paragraph break, and the result is trimmed.
/// A leading Disqus "enable javascript" notice is then dropped, followed by
/// standalone "advertisement", "sponsored content" and "click here to
/// subscribe". Spaces left behind by a phrase removal are kept as they are.
pub fn simplify(text: &str) -> String {
    let text = LINE_EDGE_REGEX.replace_all(text, "\n");
    let text = SPACE_RUN_REGEX.replace_all(&text, " ");
    let text = BLANK_LINES_REGEX.replace_all(&text, "\n\n");
    let text = text.trim();

    let text = DISQUS_PREAMBLE_REGEX.replace(text, "");
    let text = BOILERPLATE_PHRASE_REGEX.replace_all(&text, "");

    // a removed phrase between two paragraph breaks must not widen the gap
    BLANK_LINES_REGEX.replace_all(&text, "\n\n").into_owned()
}
