//! Error types for the bot.
//!
//! `AppError` is the top-level error every fallible operation in the crate returns.
//! Domain-specific enums (`ConfigError`, `CogError`, `InternalError`) live in their
//! own modules and convert into it with `#[from]`. The `Display` text of an
//! `AppError` is what users see when a slash command fails, so variants that can
//! reach a user carry a readable message.

pub mod cog;
pub mod config;
pub mod internal;

use thiserror::Error;

use crate::error::{cog::CogError, config::ConfigError, internal::InternalError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always fatal; the bot cannot start without a valid configuration.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Cog activation or command routing error.
    #[error(transparent)]
    CogErr(#[from] CogError),

    /// Unexpected internal failure such as a timeout or a malformed stored id.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// The invoking user asked for something the bot cannot do.
    ///
    /// # Fields
    /// - Message shown to the user as-is
    #[error("{0}")]
    BadRequest(String),
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
