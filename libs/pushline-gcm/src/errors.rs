use thiserror::Error;

/// GCM Transport Error Types
///
/// Failures of the send itself, before any per-token result exists. These
/// are surfaced verbatim in the dispatch outcome and never decomposed.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("GCM send request failed: {0}")]
    Request(String),

    #[error("GCM rejected the server key: {0}")]
    Unauthorized(String),

    #[error("GCM API error: {0} - {1}")]
    Api(String, String),

    #[error("Failed to parse GCM response: {0}")]
    ResponseParse(String),
}
