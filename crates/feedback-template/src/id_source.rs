//! Submission identifier sources.
//!
//! The populator asks an [`IdSource`] exactly once per document. Failures
//! never abort population: [`resolve_submission_id`] swaps in the fixed
//! fallback identifier instead.

use crate::error::IdError;
use async_trait::async_trait;
use feedback_core::{IdMode, IdServiceConfig, SubmissionId};
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Produces identifiers for filled documents.
#[async_trait]
pub trait IdSource: Send + Sync {
    async fn generate_id(&self) -> Result<SubmissionId, IdError>;
}

/// Fetches identifiers from an HTTP service returning a JSON array of strings.
#[derive(Debug, Clone)]
pub struct HttpIdSource {
    client: Client,
    endpoint: String,
}

impl HttpIdSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, IdError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| IdError::Client(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl IdSource for HttpIdSource {
    async fn generate_id(&self) -> Result<SubmissionId, IdError> {
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(IdError::Status(status.as_u16()));
        }

        let body: Value = response.json().await?;
        parse_id_response(&body)
    }
}

/// Extract the first string of a JSON array.
pub fn parse_id_response(body: &Value) -> Result<SubmissionId, IdError> {
    let id = body
        .as_array()
        .and_then(|items| items.first())
        .and_then(Value::as_str)
        .ok_or_else(|| {
            IdError::MalformedResponse(format!("expected a JSON array of strings, got {body}"))
        })?;

    SubmissionId::new(id).map_err(|e| IdError::MalformedResponse(e.to_string()))
}

/// Generates UUID v4 identifiers in-process.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalIdSource;

#[async_trait]
impl IdSource for LocalIdSource {
    async fn generate_id(&self) -> Result<SubmissionId, IdError> {
        SubmissionId::new(uuid::Uuid::new_v4().to_string())
            .map_err(|e| IdError::MalformedResponse(e.to_string()))
    }
}

/// Build the configured identifier source.
pub fn from_config(config: &IdServiceConfig) -> Result<Arc<dyn IdSource>, IdError> {
    match config.mode {
        IdMode::Remote => {
            let source = HttpIdSource::new(
                config.endpoint.clone(),
                Duration::from_secs(config.timeout_secs),
            )?;
            tracing::info!("Using ID service at {}", source.endpoint());
            Ok(Arc::new(source))
        }
        IdMode::Local => {
            tracing::info!("Using local UUID generation for submission IDs");
            Ok(Arc::new(LocalIdSource))
        }
    }
}

/// Ask `source` once; on any failure return [`SubmissionId::fallback`].
pub async fn resolve_submission_id(source: &dyn IdSource) -> SubmissionId {
    match source.generate_id().await {
        Ok(id) => {
            tracing::debug!("Generated submission ID {}", id);
            id
        }
        Err(e) => {
            tracing::warn!("Error generating unique ID: {}, using fallback", e);
            SubmissionId::fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct FailingSource;

    #[async_trait]
    impl IdSource for FailingSource {
        async fn generate_id(&self) -> Result<SubmissionId, IdError> {
            Err(IdError::Status(503))
        }
    }

    #[test]
    fn test_parse_first_element() {
        let id = parse_id_response(&json!(["3b241101-e2bb-4255-8caf-4136c566a962", "other"]))
            .expect("parse id");
        assert_eq!(id.as_str(), "3b241101-e2bb-4255-8caf-4136c566a962");
    }

    #[test]
    fn test_parse_rejects_malformed_bodies() {
        for body in [
            json!([]),
            json!({"id": "abc"}),
            json!([42]),
            json!("abc"),
            json!(["../../escape"]),
        ] {
            assert!(
                matches!(parse_id_response(&body), Err(IdError::MalformedResponse(_))),
                "accepted {body}"
            );
        }
    }

    #[tokio::test]
    async fn test_local_source_generates_distinct_ids() {
        let a = LocalIdSource.generate_id().await.expect("id");
        let b = LocalIdSource.generate_id().await.expect("id");
        assert_ne!(a, b);
        assert!(!a.is_fallback());
    }

    #[tokio::test]
    async fn test_resolve_falls_back_on_error() {
        let id = resolve_submission_id(&FailingSource).await;
        assert!(id.is_fallback());
        assert_eq!(id.as_str(), "fallback_id");
    }

    #[tokio::test]
    async fn test_unreachable_service_falls_back() {
        // Port 9 (discard) is not served on loopback in test environments.
        let source =
            HttpIdSource::new("http://127.0.0.1:9/api", Duration::from_secs(2)).expect("client");
        let id = resolve_submission_id(&source).await;
        assert!(id.is_fallback());
    }

    #[test]
    fn test_from_config_local() {
        let config = IdServiceConfig {
            mode: IdMode::Local,
            ..IdServiceConfig::default()
        };
        assert!(from_config(&config).is_ok());
    }
}
