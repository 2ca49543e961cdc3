use serde::{Deserialize, Serialize};

/// A request to extract article text from `url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRequest {
    pub url: String,
    pub user_id: Option<String>,
    /// Set to false when re-displaying content that was already counted.
    pub increment_usage: bool,
}

impl ExtractionRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            user_id: None,
            increment_usage: true,
        }
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn increment_usage(mut self, increment: bool) -> Self {
        self.increment_usage = increment;
        self
    }
}

/// Text handed back to the caller, either extracted or placeholder.
///
/// `source_url` is always the URL of the originating request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub content: String,
    pub title: String,
    pub source_url: String,
}

/// JSON body of `POST {api_base}/scrape`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ScrapeRequest<'a> {
    pub url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub increment_usage: Option<bool>,
}

impl<'a> From<&'a ExtractionRequest> for ScrapeRequest<'a> {
    fn from(request: &'a ExtractionRequest) -> Self {
        let user_id = request.user_id.as_deref();
        Self {
            url: &request.url,
            user_id,
            // usage is only tracked for identified users
            increment_usage: user_id.map(|_| request.increment_usage),
        }
    }
}

/// Success payload from the backend.
#[derive(Debug, Deserialize)]
pub(crate) struct ScrapeResponse {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}
