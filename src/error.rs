//! Error types for the Pokedex
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the Pokedex.
///
/// The cache itself never fails once constructed; every other variant comes
/// from the API client or the REPL.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Cache interval must be strictly positive and schedulable
    #[error("Invalid cache interval: must be greater than zero and fit a timer deadline")]
    InvalidInterval,

    /// Transport-level HTTP failure
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Unexpected status {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Response body was not the expected JSON
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Command invoked without a required argument
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    /// Command word not in the dispatch table
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Terminal I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex.
pub type Result<T> = std::result::Result<T, PokedexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_argument_message() {
        let err = PokedexError::MissingArgument("location area name");
        assert_eq!(err.to_string(), "Missing argument: location area name");
    }

    #[test]
    fn test_status_message_includes_url() {
        let err = PokedexError::Status {
            url: "http://localhost/pokemon/missingno".to_string(),
            status: reqwest::StatusCode::NOT_FOUND,
        };
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("missingno"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: PokedexError = io.into();
        assert!(matches!(err, PokedexError::Io(_)));
    }
}
