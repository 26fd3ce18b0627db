use serde::{Deserialize, Serialize};
use std::fmt;

/// Sampling temperature used when the config does not set one.
pub const DEFAULT_TEMPERATURE: f64 = 0.2;

/// Settings for the external generation endpoint.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Chat-completions endpoint URL.
    pub api_url: String,

    /// Model identifier sent with every request.
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Bearer token, if the endpoint requires one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Request timeout. `None` leaves the call unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE
}

impl GenerationConfig {
    pub fn new(api_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            model: model.into(),
            temperature: DEFAULT_TEMPERATURE,
            api_key: None,
            timeout_secs: None,
        }
    }
}

impl fmt::Debug for GenerationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationConfig")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
