//! Configuration schema types for the TeamSpeak GSI bridge.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod encoding;
mod logging;
mod transport;

pub use encoding::*;
pub use logging::*;
pub use transport::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct GsiConfig {
    pub encoding: EncodingConfig,
    pub transport: TransportConfig,
    pub logging: LoggingConfig,
}
