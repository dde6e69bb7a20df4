//! Error types for the meetmap client.
//!
//! Errors are split by where they originate: backend calls ([`ApiError`]), form checks
//! ([`ValidationError`]), role checks for routes and actions ([`AccessError`]) and startup
//! configuration ([`ConfigError`]). Components catch them at the call site and keep the string
//! from [`Error::user_message`] in local state, rendered as an inline alert.

pub mod access;
pub mod api;
pub mod config;

use thiserror::Error;

pub use access::AccessError;
pub use api::ApiError;
pub use config::ConfigError;
pub use crate::model::validation::ValidationError;

/// Aggregate error for operations that cross more than one concern, e.g. a form that validates
/// and then submits.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    ApiError(#[from] ApiError),
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    #[error(transparent)]
    AccessError(#[from] AccessError),
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
}

impl Error {
    /// Message shown to the user for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::ApiError(err) => err.user_message(),
            Self::ValidationError(err) => err.to_string(),
            Self::AccessError(err) => err.to_string(),
            // Configuration problems are not actionable by the user
            Self::ConfigError(_) => "The application is misconfigured".to_string(),
        }
    }
}
