//! Error types for the SolarEdge client
//!
//! Every public operation returns `Result<T, Error>`. Transport and URL
//! errors pass through unchanged, HTTP status codes are classified into
//! [`StatusKind`], and anything that goes wrong while turning a body into a
//! domain value ends up as [`Error::Decoding`] with a readable cause.

use crate::status::StatusKind;
use thiserror::Error;

/// The main error type for the SolarEdge client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Bad URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Response Errors
    // ============================================================================
    #[error("{kind}")]
    Status { kind: StatusKind },

    /// A status error enriched with text the server sent along
    #[error("{message}")]
    Described { message: String },

    #[error("Error while decoding. {cause}")]
    Decoding { cause: String },

    // ============================================================================
    // Authentication Errors
    // ============================================================================
    #[error("Authentication failed: {message}")]
    Auth { message: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a decoding error
    pub fn decoding(cause: impl Into<String>) -> Self {
        Self::Decoding {
            cause: cause.into(),
        }
    }

    /// Create a described error
    pub fn described(message: impl Into<String>) -> Self {
        Self::Described {
            message: message.into(),
        }
    }

    /// Create an auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// The classified status, if this is an unenriched status error
    pub fn status_kind(&self) -> Option<StatusKind> {
        match self {
            Error::Status { kind } => Some(*kind),
            _ => None,
        }
    }

    /// Check if this error came out of the body decoder
    pub fn is_decoding(&self) -> bool {
        matches!(self, Error::Decoding { .. })
    }
}

impl From<StatusKind> for Error {
    fn from(kind: StatusKind) -> Self {
        Self::Status { kind }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::decoding(error.to_string())
    }
}

/// Result type alias for the SolarEdge client
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for naming the section a decoding failure came from
pub trait ResultExt<T> {
    /// Prefix the error with a section name
    fn context(self, section: impl Into<String>) -> Result<T>;

    /// Prefix the error with a lazily built section name
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, section: impl Into<String>) -> Result<T> {
        self.map_err(|e| prefix(section.into(), e.into()))
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| prefix(f(), e.into()))
    }
}

fn prefix(section: String, inner: Error) -> Error {
    match inner {
        Error::Decoding { cause } => Error::decoding(format!("{section}: {cause}")),
        other => other,
    }
}
