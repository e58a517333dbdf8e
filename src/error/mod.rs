//! Error types for the Heimdall application.
//!
//! Each domain defines its own error enum with `thiserror`; the crate-level
//! [`Error`] aggregates them so callers can use `?` across domains. Note
//! that the navigation gate never propagates errors to the routing layer:
//! a failed session check is converted into a deny decision inside the gate
//! itself.

pub mod auth;
pub mod config;

use thiserror::Error;

use crate::error::{auth::AuthError, config::ConfigError};

/// Crate-level error type aggregating all domain-specific errors.
#[derive(Error, Debug)]
pub enum Error {
    /// Authentication error (session check failure).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Configuration error (invalid environment override).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
}
