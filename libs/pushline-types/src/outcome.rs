/// Outcome of one dispatch call.
///
/// A dispatch either reaches the gateway or it does not; when it does, the
/// gateway's per-token verdicts are folded into one inspectable value rather
/// than broadcast through side channels.
#[derive(Debug)]
pub enum DispatchOutcome {
    /// Every token was accepted by the gateway.
    Delivered,

    /// The send itself failed and no gateway result exists. Carried verbatim
    /// from the transport.
    TransportFailure(anyhow::Error),

    /// The gateway answered but rejected some tokens.
    PartialFailure(PartialFailure),
}

impl DispatchOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, DispatchOutcome::Delivered)
    }
}

/// Per-token rejections from one gateway result, batched.
///
/// `gone_tokens` and `failures` are independent conditions; one call can
/// produce both. Both preserve the order the tokens were sent in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialFailure {
    /// Tokens the gateway reported as permanently invalid. They will never
    /// accept delivery again; the caller should purge them from storage.
    pub gone_tokens: Vec<String>,

    /// Tokens that failed with a recoverable error code.
    pub failures: Vec<DeliveryFailure>,
}

/// One recoverable per-token delivery failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryFailure {
    pub token: String,
    pub code: String,
}
