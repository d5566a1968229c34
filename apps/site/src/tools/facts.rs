//! Client for the third-party Earth fact API.
//!
//! One uncached GET per request; no retry, no backoff. Any failure (network,
//! non-2xx, bad JSON, missing fields) surfaces as a [`FactError`] that callers
//! reduce to a single generic message.

use std::time::Duration;

use reqwest::{header::CACHE_CONTROL, Client};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum FactError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("fact API returned status {0}")]
    Status(u16),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unexpected response shape")]
    Shape,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EarthFact {
    pub fact: String,
    pub image: String,
}

#[derive(Clone)]
pub struct FactClient {
    client: Client,
    endpoint: String,
}

impl FactClient {
    pub fn new(endpoint: String) -> Result<Self, FactError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client, endpoint })
    }

    pub async fn fetch(&self) -> Result<EarthFact, FactError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FactError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let fact = parse_fact(&body)?;
        debug!("Fetched Earth fact ({} chars)", fact.fact.len());
        Ok(fact)
    }
}

/// Requires non-empty `fact` and `image` strings; extra fields are ignored.
pub fn parse_fact(body: &str) -> Result<EarthFact, FactError> {
    let value: Value = serde_json::from_str(body)?;
    let field = |name: &str| {
        value
            .get(name)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    match (field("fact"), field("image")) {
        (Some(fact), Some(image)) => Ok(EarthFact { fact, image }),
        _ => Err(FactError::Shape),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fact_happy_path() {
        let fact = parse_fact(
            r#"{"fact":"Earth is not flat.","image":"https://img.example/earth.jpg","id":3}"#,
        )
        .unwrap();
        assert_eq!(fact.fact, "Earth is not flat.");
        assert_eq!(fact.image, "https://img.example/earth.jpg");
    }

    #[test]
    fn test_parse_fact_missing_image_is_shape_error() {
        let err = parse_fact(r#"{"fact":"Earth is round-ish."}"#).unwrap_err();
        assert!(matches!(err, FactError::Shape));
    }

    #[test]
    fn test_parse_fact_empty_fact_is_shape_error() {
        let err = parse_fact(r#"{"fact":"","image":"x"}"#).unwrap_err();
        assert!(matches!(err, FactError::Shape));
    }

    #[test]
    fn test_parse_fact_bad_json() {
        assert!(matches!(
            parse_fact("<html>").unwrap_err(),
            FactError::Parse(_)
        ));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_http_error() {
        let client = FactClient::new("http://127.0.0.1:9/all/earth".to_string()).unwrap();
        assert!(matches!(client.fetch().await, Err(FactError::Http(_))));
    }
}
