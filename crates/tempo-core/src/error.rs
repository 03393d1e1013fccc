//! Error types for Tempo

use thiserror::Error;

/// The main error type for Tempo operations
#[derive(Debug, Error)]
pub enum TempoError {
    #[error("State {0} already exists")]
    DuplicateState(String),

    #[error("State name {0} not found. Did you forget to register it?")]
    UnknownState(String),

    #[error("No active state: the engine loop ran before an initial state was set")]
    NoActiveState,

    #[error("No states registered: the state loader must register at least one state")]
    NoStatesRegistered,

    #[error("Engine already started with state {0}")]
    AlreadyStarted(String),

    #[error("State {state} failed: {message}")]
    StateHook { state: String, message: String },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("TOML serialization error: {0}")]
    TomlSerError(String),
}

impl TempoError {
    /// Shorthand for a failing state hook
    pub fn state_hook(state: impl Into<String>, message: impl Into<String>) -> Self {
        TempoError::StateHook {
            state: state.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for Tempo operations
pub type Result<T> = std::result::Result<T, TempoError>;

impl From<toml::de::Error> for TempoError {
    fn from(err: toml::de::Error) -> Self {
        TempoError::TomlParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for TempoError {
    fn from(err: toml::ser::Error) -> Self {
        TempoError::TomlSerError(err.to_string())
    }
}
