/// Pushline Shared Types
///
/// Provider-agnostic building blocks for push-notification dispatch:
/// the generic notification record callers hand to a provider, the dispatch
/// target and outcome types, the provider contract, and the clock seam used
/// for deterministic expiration handling.

pub mod clock;
pub mod notification;
pub mod outcome;
pub mod provider;

pub use clock::{Clock, SystemClock};
pub use notification::Notification;
pub use outcome::{DeliveryFailure, DispatchOutcome, PartialFailure};
pub use provider::{DispatchError, PushProvider, PushTarget};
