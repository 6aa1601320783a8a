use std::env;

/// Default GCM send endpoint (the FCM legacy HTTP API)
pub const DEFAULT_API_URL: &str = "https://fcm.googleapis.com/fcm/send";

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// GCM provider configuration
#[derive(Debug, Clone)]
pub struct GcmConfig {
    /// Server API key, sent as the `Authorization: key=...` credential
    pub server_key: String,

    /// Send endpoint; override for staging or fake gateways
    pub api_url: String,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl GcmConfig {
    pub fn new(server_key: impl Into<String>) -> Self {
        GcmConfig {
            server_key: server_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }

    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(GcmConfig {
            server_key: env::var("GCM_SERVER_KEY")?,
            api_url: env::var("GCM_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            request_timeout_secs: env::var("GCM_REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| DEFAULT_REQUEST_TIMEOUT_SECS.to_string())
                .parse()?,
        })
    }
}
