use serde::{Deserialize, Serialize};

/// HTTP delivery settings. The receiver address itself is fixed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Whole-request timeout in milliseconds (valid range: 100-10000).
    pub timeout_ms: u32,
    /// TCP connect timeout in milliseconds (valid range: 50-10000).
    pub connect_timeout_ms: u32,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 1500,
            connect_timeout_ms: 500,
        }
    }
}
