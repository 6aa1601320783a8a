use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use pushline_types::{
    Clock, DeliveryFailure, DispatchError, DispatchOutcome, Notification, PartialFailure,
    PushProvider, PushTarget, SystemClock,
};

use crate::config::GcmConfig;
use crate::models::GcmResponse;
use crate::payload::build_payload;
use crate::transport::{GcmTransport, HttpGcmTransport};

/// Error code the gateway uses for tokens that will never accept delivery
/// again. Every other code is reported as recoverable.
pub const NOT_REGISTERED: &str = "NotRegistered";

/// GCM dispatch provider
///
/// Owns translation, the send, and per-token result correlation. Holds no
/// state across calls; concurrent dispatches share only the transport and
/// clock handles.
pub struct GcmProvider {
    transport: Arc<dyn GcmTransport>,
    clock: Arc<dyn Clock>,
}

impl GcmProvider {
    /// Create a provider backed by the HTTP transport.
    pub fn new(config: GcmConfig) -> Self {
        GcmProvider {
            transport: Arc::new(HttpGcmTransport::new(config)),
            clock: Arc::new(SystemClock),
        }
    }

    /// Create a provider with an injected transport and clock.
    pub fn with_transport(transport: Arc<dyn GcmTransport>, clock: Arc<dyn Clock>) -> Self {
        GcmProvider { transport, clock }
    }
}

#[async_trait]
impl PushProvider for GcmProvider {
    async fn push_notification(
        &self,
        notification: &Notification,
        target: PushTarget,
    ) -> Result<DispatchOutcome, DispatchError> {
        let tokens = target.into_tokens();
        if tokens.is_empty() {
            debug!("No device tokens to push to, skipping send");
            return Ok(DispatchOutcome::Delivered);
        }

        let payload = build_payload(notification, self.clock.now());

        info!("Sending GCM push to {} device token(s)", tokens.len());

        let response = match self.transport.send(&payload, &tokens).await {
            Ok(response) => response,
            Err(e) => {
                warn!("GCM send failed before reaching the gateway: {}", e);
                return Ok(DispatchOutcome::TransportFailure(e.into()));
            }
        };

        correlate(&tokens, &response)
    }
}

/// Walk the gateway's result array in lock-step with the token list and
/// classify every entry. `results[i]` belongs to `tokens[i]`; that positional
/// contract is the only way to attribute verdicts, so unequal lengths abort
/// the call.
fn correlate(tokens: &[String], response: &GcmResponse) -> Result<DispatchOutcome, DispatchError> {
    if response.results.len() != tokens.len() {
        error!(
            "GCM result count mismatch: sent {} tokens, got {} results",
            tokens.len(),
            response.results.len()
        );
        return Err(DispatchError::ResultCountMismatch {
            sent: tokens.len(),
            received: response.results.len(),
        });
    }

    let mut gone_tokens = Vec::new();
    let mut failures = Vec::new();

    for (token, result) in tokens.iter().zip(&response.results) {
        match &result.error {
            Some(code) if code == NOT_REGISTERED => gone_tokens.push(token.clone()),
            Some(code) => failures.push(DeliveryFailure {
                token: token.clone(),
                code: code.clone(),
            }),
            None => {}
        }
    }

    if gone_tokens.is_empty() && failures.is_empty() {
        debug!("GCM delivered to all {} device token(s)", tokens.len());
        return Ok(DispatchOutcome::Delivered);
    }

    if !gone_tokens.is_empty() {
        info!("GCM reported {} device token(s) gone", gone_tokens.len());
    }
    if !failures.is_empty() {
        warn!(
            "GCM delivery errors:\n{}",
            delivery_failure_report(&failures)
        );
    }

    Ok(DispatchOutcome::PartialFailure(PartialFailure {
        gone_tokens,
        failures,
    }))
}

/// Render the batched recoverable failures of one dispatch, one line per
/// token, in the order the tokens were sent.
pub fn delivery_failure_report(failures: &[DeliveryFailure]) -> String {
    failures
        .iter()
        .map(|f| format!("GCM error code: {}, deviceToken: {}", f.code, f.token))
        .collect::<Vec<_>>()
        .join("\n")
}
