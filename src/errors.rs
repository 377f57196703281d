//! Error types for film_search
//!
//! The ranking core (tokenizer, stopword filter, ranker) is total and never
//! fails. Errors only arise in the surrounding layer: configuration
//! validation, JSON decoding, and the external corpus/translation seams.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SearchError>;

/// Main error type for film_search
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// A corpus provider could not produce its documents
    #[error("Corpus unavailable: {message}")]
    Corpus { message: String },

    /// The query translator rejected or failed to translate a query
    #[error("Translation failed: {message}")]
    Translation { message: String },
}

impl SearchError {
    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create a corpus error
    pub fn corpus(message: impl Into<String>) -> Self {
        Self::Corpus {
            message: message.into(),
        }
    }

    /// Create a translation error
    pub fn translation(message: impl Into<String>) -> Self {
        Self::Translation {
            message: message.into(),
        }
    }

    /// Check if this error came from one of the external collaborators
    /// (corpus provider or query translator) rather than from caller input.
    pub fn is_external(&self) -> bool {
        matches!(self, Self::Corpus { .. } | Self::Translation { .. })
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
