/// Pushline GCM Provider
///
/// Google Cloud Messaging dispatch provider implementing the Pushline
/// provider contract.
///
/// It handles:
/// - Translation of the generic notification record into the GCM payload
/// - Single and multicast delivery through a pluggable transport
/// - Per-token result correlation (delivered / recoverable / gone)
/// - Batched reporting of permanently invalid device tokens

pub mod config;
pub mod errors;
pub mod models;
pub mod payload;
pub mod provider;
pub mod transport;

pub use config::GcmConfig;
pub use errors::TransportError;
pub use models::{GcmNotification, GcmPayload, GcmResponse, GcmResult};
pub use payload::build_payload;
pub use provider::{delivery_failure_report, GcmProvider, NOT_REGISTERED};
pub use transport::{GcmTransport, HttpGcmTransport};
