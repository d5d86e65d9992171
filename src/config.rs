//! Bot configuration.
//!
//! The only runtime setting is the Discord credential, read from the environment.
//! Everything else is fixed at compile time: the command prefix, the administrator
//! allowed to toggle the welcome and logging features, and the onboarding channels
//! referenced by the welcome notice.

use serenity::all::{ChannelId, UserId};

use crate::error::{config::ConfigError, AppError};

/// Character every command must start with.
pub const COMMAND_PREFIX: char = '^';

/// Discord id of the only user allowed to run `welcome` and `datato`.
pub const ADMIN_USER_ID: u64 = 123456789012345678;

/// Default log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warden=info,serenity=warn";

/// A channel linked from the welcome notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnboardingChannel {
    /// Discord id of the channel
    pub channel_id: u64,
    /// Literal shown when the channel cannot be resolved
    pub fallback: &'static str,
}

impl OnboardingChannel {
    pub fn id(&self) -> ChannelId {
        ChannelId::new(self.channel_id)
    }
}

pub const ROLES_CHANNEL: OnboardingChannel = OnboardingChannel {
    channel_id: 111111111111111111,
    fallback: "#roles",
};

pub const INTRODUCTIONS_CHANNEL: OnboardingChannel = OnboardingChannel {
    channel_id: 222222222222222222,
    fallback: "#introductions",
};

pub const INFO_CHANNEL: OnboardingChannel = OnboardingChannel {
    channel_id: 333333333333333333,
    fallback: "#info",
};

pub const LOUNGE_CHANNEL: OnboardingChannel = OnboardingChannel {
    channel_id: 444444444444444444,
    fallback: "#lounge",
};

/// Returns true if `user_id` is the configured administrator.
pub fn is_admin(user_id: UserId) -> bool {
    user_id.get() == ADMIN_USER_ID
}

pub struct Config {
    pub discord_token: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// `.env` should already have been loaded with `dotenvy` by the caller.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables are present
    /// - `Err(AppError::ConfigErr)` - `DISCORD_TOKEN` is missing or empty
    pub fn from_env() -> Result<Self, AppError> {
        let discord_token = std::env::var("DISCORD_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string()))?;

        Ok(Self { discord_token })
    }
}
