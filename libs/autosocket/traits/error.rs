use thiserror::Error;

/// Main error type for autosocket
#[derive(Error, Debug)]
pub enum AutoSocketError {
    /// The environment cannot provide a WebSocket transport
    #[error("WebSocket transport capability is missing")]
    CapabilityMissing,

    /// Invalid setup input
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The background connection task ended abnormally
    #[error("Connection task failed: {0}")]
    Join(String),
}

/// Result type for autosocket operations
pub type Result<T> = std::result::Result<T, AutoSocketError>;
