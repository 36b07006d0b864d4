//! Error types for the portfolio page controllers

use thiserror::Error;

/// Main error type for portfolio controller operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// Configuration is structurally valid JSON but semantically unusable
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Contact form failed client-side validation
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Contact form submission could not reach the endpoint
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Referenced form field does not exist
    #[error("Unknown form field: {0}")]
    UnknownField(String),
}

/// Client-side validation failure for the contact form.
///
/// Carries every offending field so the view can mark all of them at once.
#[derive(Error, Debug, Clone, PartialEq, Eq, Default)]
#[error("missing fields {missing:?}, malformed email: {malformed_email}")]
pub struct ValidationError {
    /// Names of required fields that were blank after trimming
    pub missing: Vec<String>,
    /// Whether the email field held a value that is not an address
    pub malformed_email: bool,
}

impl ValidationError {
    /// True when nothing was wrong
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && !self.malformed_email
    }
}

/// Failure to deliver a form submission
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request never produced a response (offline, DNS, CORS...)
    #[error("Network error: {0}")]
    Network(String),

    /// The request could not be built from the form data
    #[error("Request error: {0}")]
    Request(String),
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;
