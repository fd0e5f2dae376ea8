//! Error types and handling for the weather kiosk
//!
//! Two failure layers are kept apart on purpose: transport errors
//! (timeout, HTTP status, network) abort a whole refresh cycle, while
//! shape errors only degrade the section whose payload was malformed.

use thiserror::Error;

/// Result type alias for kiosk operations
pub type Result<T> = std::result::Result<T, KioskError>;

/// Main error type for the kiosk
#[derive(Debug, Error)]
pub enum KioskError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Client-side deadline expired before a response arrived
    #[error("Timeout error: {message}")]
    Timeout { message: String },

    /// Backend answered with a non-2xx status
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    /// Connection-level failure before any HTTP response
    #[error("Network error: {message}")]
    Network { message: String },

    /// Response was JSON but did not have the expected structure
    #[error("Shape error in {section}: {message}")]
    Shape { section: String, message: String },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// File I/O errors
    #[error("I/O error: {message}")]
    Io { message: String },

    /// Validation errors
    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    /// View server errors
    #[error("Web server error: {message}")]
    Web { message: String },

    /// Generic errors with context
    #[error("Error: {message}")]
    Generic { message: String },
}

impl KioskError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        KioskError::Config {
            message: message.into(),
        }
    }

    /// Create a new timeout error
    pub fn timeout<S: Into<String>>(message: S) -> Self {
        KioskError::Timeout {
            message: message.into(),
        }
    }

    /// Create a new HTTP status error
    pub fn http<S: Into<String>>(status: u16, message: S) -> Self {
        KioskError::Http {
            status,
            message: message.into(),
        }
    }

    /// Create a new network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        KioskError::Network {
            message: message.into(),
        }
    }

    /// Create a new shape error for one payload section
    pub fn shape<S: Into<String>, M: Into<String>>(section: S, message: M) -> Self {
        KioskError::Shape {
            section: section.into(),
            message: message.into(),
        }
    }

    /// Create a new serialization error
    pub fn serialization<S: Into<String>>(message: S) -> Self {
        KioskError::Serialization {
            message: message.into(),
        }
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        KioskError::Io {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(field: S, message: S) -> Self {
        KioskError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new web error
    pub fn web<S: Into<String>>(message: S) -> Self {
        KioskError::Web {
            message: message.into(),
        }
    }

    /// Create a new generic error
    pub fn generic<S: Into<String>>(message: S) -> Self {
        KioskError::Generic {
            message: message.into(),
        }
    }

    /// Whether this error belongs to the transport layer.
    ///
    /// An unreadable (non-JSON) body counts as transport: nothing usable
    /// was received for that resource.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            KioskError::Timeout { .. }
                | KioskError::Http { .. }
                | KioskError::Network { .. }
                | KioskError::Serialization { .. }
        )
    }

    /// Status-line text shown on the kiosk for this failure
    pub fn user_message(&self) -> &'static str {
        match self {
            KioskError::Timeout { .. } => "Timeout - kontrollera nätverksanslutning",
            KioskError::Http { status: 404, .. } => "API-endpoint hittades inte",
            KioskError::Http { status, .. } if *status >= 500 => "Serverfel - försök igen senare",
            KioskError::Network { .. } => "Nätverksfel - kontrollera anslutning",
            _ => "Kunde inte hämta väderdata",
        }
    }
}

impl From<std::io::Error> for KioskError {
    fn from(err: std::io::Error) -> Self {
        KioskError::io(err.to_string())
    }
}

impl From<serde_yaml::Error> for KioskError {
    fn from(err: serde_yaml::Error) -> Self {
        KioskError::serialization(err.to_string())
    }
}

impl From<serde_json::Error> for KioskError {
    fn from(err: serde_json::Error) -> Self {
        KioskError::serialization(err.to_string())
    }
}

impl From<reqwest::Error> for KioskError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            KioskError::timeout(err.to_string())
        } else if let Some(status) = err.status() {
            KioskError::http(status.as_u16(), err.to_string())
        } else if err.is_decode() {
            KioskError::serialization(err.to_string())
        } else {
            KioskError::network(err.to_string())
        }
    }
}

impl From<chrono::ParseError> for KioskError {
    fn from(err: chrono::ParseError) -> Self {
        KioskError::Validation {
            field: "datetime".to_string(),
            message: err.to_string(),
        }
    }
}
