use std::io;
use thiserror::Error;

/// Unified error type for the hfchat application
#[derive(Error, Debug)]
pub enum ChatError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// User input errors
    #[error("Input error: {0}")]
    Input(String),

    /// IO-related errors
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Network-related errors outside the per-request taxonomy
    #[error("Network error: {0}")]
    Network(String),
}

impl From<serde_yml::Error> for ChatError {
    fn from(err: serde_yml::Error) -> Self {
        ChatError::Serialization(format!("YAML error: {}", err))
    }
}

/// Outcome classification for a single inference request.
///
/// Every variant renders to the exact line that is appended to the
/// transcript in place of an assistant reply. Nothing here is retried;
/// the user re-sends if they want another attempt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiFailure {
    #[error("❌ No API token is set. Use /token or --token to set one.")]
    MissingToken,

    #[error("❌ The API token was rejected.")]
    InvalidToken,

    #[error("⏳ The model is still loading. Wait a moment and try again.")]
    ModelLoading,

    #[error("⏳ The request timed out. Try again.")]
    TimedOut,

    #[error("❌ Unexpected response format from the inference API.")]
    UnexpectedResponse,

    #[error("❌ Request failed (status: {0}).")]
    Status(u16),

    #[error("❌ Connection error: {0}")]
    Connection(String),
}
