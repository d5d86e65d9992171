//! Outbound seam between the services and the chat platform.
//!
//! Services never call Serenity directly: every reply, notice and lookup goes through
//! `Gateway`. The bot layer implements it on top of a Serenity `Context`; tests use a
//! recording implementation.

use serenity::all::{ChannelId, GuildId, UserId};
use serenity::async_trait;

use crate::{error::AppError, model::notice::Notice};

/// A channel the bot could look up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedChannel {
    pub id: ChannelId,
    pub name: String,
    /// Whether the channel is a regular guild text channel
    pub is_text: bool,
}

impl ResolvedChannel {
    /// Discord mention markup for this channel.
    pub fn mention(&self) -> String {
        format!("<#{}>", self.id)
    }
}

/// Guild details shown in the welcome notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildSummary {
    pub name: String,
    pub icon_url: Option<String>,
}

#[async_trait]
pub trait Gateway: Send + Sync {
    /// Sends a plain text message to a channel.
    async fn send_text(&self, channel_id: ChannelId, content: &str) -> Result<(), AppError>;

    /// Sends a rich notice (embed) to a channel.
    async fn send_notice(&self, channel_id: ChannelId, notice: &Notice) -> Result<(), AppError>;

    /// Looks up a channel the bot can currently see.
    ///
    /// # Returns
    /// - `Some(ResolvedChannel)` - Channel exists and is accessible
    /// - `None` - Channel was deleted, is not a guild channel, or the bot lacks access
    async fn resolve_channel(&self, channel_id: ChannelId) -> Option<ResolvedChannel>;

    /// Looks up name and icon of a guild.
    async fn guild_summary(&self, guild_id: GuildId) -> Option<GuildSummary>;

    /// Fetches the reason recorded on a user's ban.
    ///
    /// # Returns
    /// - `Ok(Some(reason))` - Ban found with a reason
    /// - `Ok(None)` - Ban found without a reason, or no ban record for the user
    /// - `Err(AppError)` - The lookup itself failed
    async fn fetch_ban_reason(
        &self,
        guild_id: GuildId,
        user_id: UserId,
    ) -> Result<Option<String>, AppError>;
}
