//! Error types for the bot.
//!
//! `AppError` is the top-level error returned from startup and from every event handler.
//! It wraps the domain-specific errors defined in the submodules. Errors raised while
//! handling a single gateway event are logged by the bot layer and never terminate the
//! process; only startup errors propagate out of `main`.

pub mod command;
pub mod config;
pub mod internal;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the bot. Most variants use
/// `#[from]` for automatic conversion so handlers can use `?` freely.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Fatal: the bot cannot connect without its credentials.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Unexpected conversion failure inside the bot.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. Raised when sending a reply or notice fails or when the
    /// gateway client cannot be built.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
