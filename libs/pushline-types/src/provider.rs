use async_trait::async_trait;
use thiserror::Error;

use crate::notification::Notification;
use crate::outcome::DispatchOutcome;

/// Dispatch target: a single device token or an ordered list of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushTarget {
    Token(String),
    Tokens(Vec<String>),
}

impl PushTarget {
    /// Normalize to an ordered token list.
    pub fn into_tokens(self) -> Vec<String> {
        match self {
            PushTarget::Token(token) => vec![token],
            PushTarget::Tokens(tokens) => tokens,
        }
    }
}

impl From<String> for PushTarget {
    fn from(token: String) -> Self {
        PushTarget::Token(token)
    }
}

impl From<&str> for PushTarget {
    fn from(token: &str) -> Self {
        PushTarget::Token(token.to_string())
    }
}

impl From<Vec<String>> for PushTarget {
    fn from(tokens: Vec<String>) -> Self {
        PushTarget::Tokens(tokens)
    }
}

/// Contract violations that abort a dispatch call.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The gateway broke its positional-result contract. With unequal
    /// lengths there is no way to attribute verdicts to tokens, so the call
    /// fails instead of guessing.
    #[error("gateway returned {received} results for {sent} device tokens")]
    ResultCountMismatch { sent: usize, received: usize },
}

/// Push provider contract.
///
/// Implementations own the translation to their wire format, the send, and
/// the interpretation of the gateway's per-token results. One call, one
/// outcome; no state survives between calls.
#[async_trait]
pub trait PushProvider: Send + Sync {
    async fn push_notification(
        &self,
        notification: &Notification,
        target: PushTarget,
    ) -> Result<DispatchOutcome, DispatchError>;
}
