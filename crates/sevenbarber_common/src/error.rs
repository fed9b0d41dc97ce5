// --- File: crates/sevenbarber_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type shared by the Seven Barber crates.
///
/// Feature crates keep their own error enums and convert into this one at the
/// HTTP boundary, so every failure maps onto a status code the same way.
#[derive(Error, Debug)]
pub enum SevenBarberError {
    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Service-account credentials could not be loaded
    #[error("Credential error: {0}")]
    CredentialError(String),

    /// User input failed validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// A request arrived in a state that does not accept it
    #[error("Invalid state: {0}")]
    StateError(String),

    /// A static asset the service depends on is missing or unreadable
    #[error("Asset error: {0}")]
    AssetError(String),

    /// An external service call failed
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// Anything else
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for SevenBarberError {
    fn status_code(&self) -> u16 {
        match self {
            SevenBarberError::ConfigError(_) => 500,
            SevenBarberError::CredentialError(_) => 500,
            SevenBarberError::ValidationError(_) => 422,
            SevenBarberError::StateError(_) => 409,
            SevenBarberError::AssetError(_) => 500,
            SevenBarberError::ExternalServiceError { .. } => 502,
            SevenBarberError::InternalError(_) => 500,
        }
    }
}

/// Adds a human readable context to any error, turning it into a [`SevenBarberError`].
pub trait Context<T, E> {
    fn context<C>(self, context: C) -> Result<T, SevenBarberError>
    where
        C: fmt::Display + Send + Sync + 'static;

    fn with_context<C, F>(self, f: F) -> Result<T, SevenBarberError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, SevenBarberError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| SevenBarberError::InternalError(format!("{}: {}", context, error)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, SevenBarberError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| SevenBarberError::InternalError(format!("{}: {}", f(), error)))
    }
}

impl From<config::ConfigError> for SevenBarberError {
    fn from(err: config::ConfigError) -> Self {
        SevenBarberError::ConfigError(err.to_string())
    }
}

impl From<std::io::Error> for SevenBarberError {
    fn from(err: std::io::Error) -> Self {
        SevenBarberError::InternalError(err.to_string())
    }
}

pub fn asset_error<T: fmt::Display>(message: T) -> SevenBarberError {
    SevenBarberError::AssetError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> SevenBarberError {
    SevenBarberError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}
