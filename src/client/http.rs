use async_trait::async_trait;
use reqwest::{
    Client, ClientBuilder,
    header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use tracing::{debug, instrument};

use crate::client::{
    classify::{Outcome, classify},
    errors::{BuildError, ProtectionError, TransportError},
    types::{ExtractionRequest, ExtractionResult, ScrapeRequest},
};
use crate::config::ClientConfig;

const JSON: &str = "application/json";

/// Anything that can turn a URL into readable content.
///
/// Callers hold `Arc<dyn ContentExtractor>` so tests can swap in a double.
#[async_trait]
pub trait ContentExtractor: Send + Sync {
    async fn extract(
        &self,
        request: ExtractionRequest,
    ) -> Result<ExtractionResult, ProtectionError>;
}

/// Client for the backend `scrape` endpoint.
///
/// Never fails for ordinary network or server faults: those produce
/// placeholder content. Only anti-scraping protection is reported as an error.
#[derive(Debug, Clone)]
pub struct ExtractionClient {
    http: Client,
    scrape_url: String,
}

impl ExtractionClient {
    pub fn new(config: &ClientConfig) -> Result<Self, BuildError> {
        let http = ClientBuilder::new()
            // whole request, body included; an expired budget drops the
            // in-flight request
            .timeout(config.request_timeout())
            .user_agent(config.user_agent())
            .default_headers({
                let mut headers = HeaderMap::new();
                headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON));
                headers.insert(ACCEPT, HeaderValue::from_static(JSON));
                headers
            })
            .build()?;

        Ok(Self {
            http,
            scrape_url: config.scrape_url(),
        })
    }

    pub fn scrape_url(&self) -> &str {
        &self.scrape_url
    }

    /// Extract `url`, tracking usage against `user_id` when given.
    pub async fn extract_url(
        &self,
        url: &str,
        user_id: Option<&str>,
        increment_usage: bool,
    ) -> Result<ExtractionResult, ProtectionError> {
        let mut request = ExtractionRequest::new(url).increment_usage(increment_usage);
        if let Some(user_id) = user_id {
            request = request.with_user(user_id);
        }
        self.extract(request).await
    }

    #[instrument(skip_all, fields(url = %request.url))]
    pub async fn extract(
        &self,
        request: ExtractionRequest,
    ) -> Result<ExtractionResult, ProtectionError> {
        let outcome = self.attempt(&request).await;
        outcome.resolve(&request.url)
    }

    /// One scrape attempt, no retries.
    async fn attempt(&self, request: &ExtractionRequest) -> Outcome {
        let body = ScrapeRequest::from(request);
        debug!(
            endpoint = %self.scrape_url,
            with_user = body.user_id.is_some(),
            "Requesting extraction"
        );

        let response = match self.http.post(&self.scrape_url).json(&body).send().await {
            Ok(response) => response,
            Err(e) => return Outcome::from_transport(TransportError::from_reqwest_error(e)),
        };

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => return Outcome::from_transport(TransportError::from_reqwest_error(e)),
        };

        debug!(%status, bytes = text.len(), "Received backend response");
        classify(status, &text)
    }
}

#[async_trait]
impl ContentExtractor for ExtractionClient {
    async fn extract(
        &self,
        request: ExtractionRequest,
    ) -> Result<ExtractionResult, ProtectionError> {
        ExtractionClient::extract(self, request).await
    }
}
