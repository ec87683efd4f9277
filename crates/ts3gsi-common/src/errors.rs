use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures of a single delivery attempt to the receiver.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// No HTTP client could be acquired; every send fails with this.
    #[error("transport unavailable: {0}")]
    Unavailable(String),

    #[error("failed to serialize state document: {0}")]
    Serialize(String),

    #[error("request failed: {0}")]
    Request(String),
}

/// Failures of a query against the host client's function table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("host function not available: {0}")]
    FunctionMissing(&'static str),

    #[error("host call {function} returned error code {code}")]
    Call { function: &'static str, code: u32 },
}

#[derive(Debug, thiserror::Error)]
pub enum GsiError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Host(#[from] HostError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
