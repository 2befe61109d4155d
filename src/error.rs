//! Crate-wide error type and result alias.

use thiserror::Error;

use crate::auth::StatusRedirect;
use crate::validation::ValidationErrors;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A record failed its validation pipeline. Recoverable: carries the
    /// accumulated (field, message) pairs for the caller to display.
    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    /// Required context was missing (e.g. no authenticated user). The web
    /// layer is expected to act on the redirect instead of rendering an
    /// error.
    #[error("redirect to {}: {}", .0.target, .0.message)]
    Redirect(StatusRedirect),

    /// Persistence failure. Propagates untouched to the caller's error
    /// boundary; nothing in this crate catches or retries it.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    #[error("smtp settings missing from configuration")]
    SmtpNotConfigured,

    #[error("invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("failed to build email message: {0}")]
    Mail(#[from] lettre::error::Error),

    #[error("smtp transport error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}
