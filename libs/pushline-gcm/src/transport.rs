use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use tracing::debug;

use crate::config::GcmConfig;
use crate::errors::TransportError;
use crate::models::{GcmPayload, GcmResponse};

/// Transport seam between the provider and the gateway.
///
/// The provider never performs network I/O itself. Retry and backoff policy,
/// if any, belongs on this side of the seam, never in the correlator.
#[async_trait]
pub trait GcmTransport: Send + Sync {
    async fn send(
        &self,
        payload: &GcmPayload,
        tokens: &[String],
    ) -> Result<GcmResponse, TransportError>;
}

/// Wire request body: the payload plus its addressing. A single token is
/// addressed with `to`, a batch with `registration_ids`.
#[derive(Debug, Serialize)]
struct GcmRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    to: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    registration_ids: Option<&'a [String]>,

    #[serde(flatten)]
    payload: &'a GcmPayload,
}

impl<'a> GcmRequest<'a> {
    fn new(payload: &'a GcmPayload, tokens: &'a [String]) -> Self {
        if tokens.len() == 1 {
            GcmRequest {
                to: Some(tokens[0].as_str()),
                registration_ids: None,
                payload,
            }
        } else {
            GcmRequest {
                to: None,
                registration_ids: Some(tokens),
                payload,
            }
        }
    }
}

/// HTTP transport for the GCM send endpoint
pub struct HttpGcmTransport {
    client: reqwest::Client,
    config: GcmConfig,
}

impl HttpGcmTransport {
    pub fn new(config: GcmConfig) -> Self {
        HttpGcmTransport {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl GcmTransport for HttpGcmTransport {
    async fn send(
        &self,
        payload: &GcmPayload,
        tokens: &[String],
    ) -> Result<GcmResponse, TransportError> {
        let body = GcmRequest::new(payload, tokens);

        debug!(
            "POST {} for {} device token(s)",
            self.config.api_url,
            tokens.len()
        );

        let response = self
            .client
            .post(&self.config.api_url)
            .header("Authorization", format!("key={}", self.config.server_key))
            .header("Content-Type", "application/json")
            .timeout(Duration::from_secs(self.config.request_timeout_secs))
            .json(&body)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        match response.status() {
            StatusCode::OK => response
                .json::<GcmResponse>()
                .await
                .map_err(|e| TransportError::ResponseParse(e.to_string())),
            StatusCode::UNAUTHORIZED => Err(TransportError::Unauthorized(
                "server key was not accepted".to_string(),
            )),
            status => {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                Err(TransportError::Api(status.to_string(), error_text))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_token_is_addressed_with_to() {
        let tokens = vec!["a-device-token".to_string()];
        let payload = GcmPayload::default();

        let serialized = serde_json::to_value(GcmRequest::new(&payload, &tokens)).unwrap();

        assert_eq!(serialized.get("to"), Some(&json!("a-device-token")));
        assert!(serialized.get("registration_ids").is_none());
    }

    #[test]
    fn test_token_batch_is_addressed_with_registration_ids() {
        let tokens = vec!["t1".to_string(), "t2".to_string()];
        let payload = GcmPayload::default();

        let serialized = serde_json::to_value(GcmRequest::new(&payload, &tokens)).unwrap();

        assert!(serialized.get("to").is_none());
        assert_eq!(
            serialized.get("registration_ids"),
            Some(&json!(["t1", "t2"]))
        );
    }

    #[test]
    fn test_payload_fields_are_flattened_into_the_request() {
        let tokens = vec!["t1".to_string(), "t2".to_string()];
        let payload = GcmPayload {
            collapse_key: Some("chat".to_string()),
            time_to_live: Some(60),
            ..Default::default()
        };

        let serialized = serde_json::to_value(GcmRequest::new(&payload, &tokens)).unwrap();

        assert_eq!(serialized.get("collapse_key"), Some(&json!("chat")));
        assert_eq!(serialized.get("time_to_live"), Some(&json!(60)));
        assert!(serialized.get("payload").is_none());
        assert!(serialized.get("delay_while_idle").is_none());
    }
}
