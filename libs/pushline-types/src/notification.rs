use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Generic notification record
///
/// The provider-agnostic shape callers hand to a push provider. Known fields
/// are typed; every other scalar the caller supplies lands in `extras` and is
/// forwarded into the provider's data payload. Absence is modeled with
/// `Option` or a JSON `null` in `extras`; `false` and `0` are real values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Message text shown to the user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<String>,

    /// Badge count for the app icon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<u32>,

    /// Sender display name; becomes the notification title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_from: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub click_action: Option<String>,

    /// Fold the decoration fields into the raw data payload instead of a
    /// display notification block
    #[serde(default)]
    pub data_only: bool,

    /// Coalescing key, passed through to the gateway verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapse_key: Option<String>,

    /// Delivery-timing hint, passed through to the gateway verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_while_idle: Option<bool>,

    /// Relative time-to-live in seconds; wins over `expiration_time`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_interval: Option<u32>,

    /// Absolute expiration instant, converted to whole seconds from "now"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_time: Option<DateTime<Utc>>,

    /// Arbitrary custom key/value pairs forwarded as data
    #[serde(flatten)]
    pub extras: Map<String, Value>,
}
