//! Custom error types for racedeck

use std::fmt;

/// Main error type for racedeck operations
#[derive(Debug)]
pub enum RaceDeckError {
    /// Configuration related errors
    Config(String),
    /// HTTP API errors (transport, status codes, bad bodies)
    Remote(String),
    /// Push channel transport and framing errors
    PushChannel(String),
    /// TUI related errors
    Tui(String),
    /// General I/O errors
    Io(std::io::Error),
    /// Serialization errors
    Serialization(String),
}

impl fmt::Display for RaceDeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RaceDeckError::Config(msg) => write!(f, "Configuration error: {}", msg),
            RaceDeckError::Remote(msg) => write!(f, "Remote operation error: {}", msg),
            RaceDeckError::PushChannel(msg) => write!(f, "Push channel error: {}", msg),
            RaceDeckError::Tui(msg) => write!(f, "TUI error: {}", msg),
            RaceDeckError::Io(err) => write!(f, "I/O error: {}", err),
            RaceDeckError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for RaceDeckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RaceDeckError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RaceDeckError {
    fn from(err: std::io::Error) -> Self {
        RaceDeckError::Io(err)
    }
}

impl From<serde_json::Error> for RaceDeckError {
    fn from(err: serde_json::Error) -> Self {
        RaceDeckError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for RaceDeckError {
    fn from(err: toml::de::Error) -> Self {
        RaceDeckError::Config(err.to_string())
    }
}

impl From<reqwest::Error> for RaceDeckError {
    fn from(err: reqwest::Error) -> Self {
        RaceDeckError::Remote(err.to_string())
    }
}

impl From<tokio_tungstenite::tungstenite::Error> for RaceDeckError {
    fn from(err: tokio_tungstenite::tungstenite::Error) -> Self {
        RaceDeckError::PushChannel(err.to_string())
    }
}

/// Result type alias for racedeck operations
pub type Result<T> = std::result::Result<T, RaceDeckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes_category() {
        let err = RaceDeckError::Remote("connection refused".to_string());
        assert_eq!(err.to_string(), "Remote operation error: connection refused");

        let err = RaceDeckError::Config("duplicate server id 'a'".to_string());
        assert!(err.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error;

        let err: RaceDeckError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert!(err.source().is_some());
        assert!(RaceDeckError::Tui("x".to_string()).source().is_none());
    }

    #[test]
    fn test_json_error_maps_to_serialization() {
        let err: RaceDeckError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, RaceDeckError::Serialization(_)));
    }
}
