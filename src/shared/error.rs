use thiserror::Error;

/// Errors returned by the simulation engine.
///
/// All of them are synchronous rejections; a failed call leaves the engine
/// state unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// Construction parameters out of range.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// Floors out of range or identical endpoints.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    /// Command not allowed in the current system status.
    #[error("invalid state: {0}")]
    InvalidState(String),
}
