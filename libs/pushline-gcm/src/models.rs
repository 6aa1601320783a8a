use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// GCM message payload
///
/// The provider-specific shape produced by the payload builder. Device
/// tokens are attached by the transport, not here. Optional fields stay off
/// the wire entirely when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GcmPayload {
    /// Flat key/value payload handed to the app
    pub data: Map<String, Value>,

    /// Display notification block; absent for data-style messages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<GcmNotification>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapse_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_while_idle: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_live: Option<u32>,
}

/// GCM display notification block
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GcmNotification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub click_action: Option<String>,
}

/// Multicast send result returned by the gateway
#[derive(Debug, Clone, Deserialize)]
pub struct GcmResponse {
    #[serde(rename = "success")]
    pub success_count: u32,

    #[serde(rename = "failure")]
    pub failure_count: u32,

    /// Per-token results, positionally aligned with the tokens of the send
    /// this response answers
    #[serde(default)]
    pub results: Vec<GcmResult>,
}

/// Per-token result entry
///
/// The gateway sets exactly one of `message_id` / `error`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GcmResult {
    #[serde(default)]
    pub message_id: Option<String>,

    #[serde(default)]
    pub error: Option<String>,
}
