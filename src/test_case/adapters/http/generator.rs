//! `reqwest` client for the `generate-gherkin` endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::{Map, Value};
use std::time::Duration;

use crate::test_case::{
    domain::GherkinScenario,
    ports::{GeneratorError, GherkinGenerator},
};

const GENERATE_PATH: &str = "generate-gherkin/";

#[derive(Debug, Serialize)]
struct GenerateGherkinRequest<'a> {
    user_story: &'a str,
}

/// Generator adapter that POSTs user stories to an HTTP service.
///
/// One request per call, bounded by the client timeout; no retries.
#[derive(Debug, Clone)]
pub struct HttpGherkinGenerator {
    client: Client,
    endpoint: String,
}

impl HttpGherkinGenerator {
    /// Creates a generator for the service rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`reqwest::Error`] when the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint(base_url),
        })
    }

    /// Returns the full URL requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn endpoint(base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    format!("{base}/{GENERATE_PATH}")
}

#[async_trait]
impl GherkinGenerator for HttpGherkinGenerator {
    async fn generate(&self, user_story: &str) -> Result<GherkinScenario, GeneratorError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&GenerateGherkinRequest { user_story })
            .send()
            .await
            .map_err(|error| GeneratorError::Unavailable(format!("request failed: {error}")))?;

        let status = response.status();
        let body = response.text().await.map_err(|error| {
            GeneratorError::Unavailable(format!("response read failed: {error}"))
        })?;

        if !status.is_success() {
            return Err(GeneratorError::Unavailable(format!(
                "request failed with status {status}: {body}"
            )));
        }

        parse_reply(&body)
    }
}

/// Extracts the scenario from a reply body. Only a JSON object whose
/// `gherkin` member is a non-empty string is accepted.
fn parse_reply(body: &str) -> Result<GherkinScenario, GeneratorError> {
    let object: Map<String, Value> = serde_json::from_str(body).map_err(|error| {
        GeneratorError::InvalidResponse(format!("expected a JSON object: {error}"))
    })?;
    let text = object
        .get("gherkin")
        .and_then(Value::as_str)
        .ok_or_else(|| GeneratorError::InvalidResponse("missing `gherkin` string".to_owned()))?;
    GherkinScenario::new(text)
        .map_err(|_| GeneratorError::InvalidResponse("empty `gherkin` field".to_owned()))
}
