//! Serenity implementation of the outbound `Gateway`.

use serenity::all::{
    Channel, ChannelId, ChannelType, Context, CreateEmbed, CreateEmbedFooter, CreateMessage,
    GuildId, Timestamp, UserId,
};
use serenity::async_trait;

use crate::{
    error::{internal::InternalError, AppError},
    gateway::{Gateway, GuildSummary, ResolvedChannel},
    model::notice::Notice,
};

/// Gateway backed by the Serenity context of the event being handled.
pub struct SerenityGateway {
    ctx: Context,
}

impl SerenityGateway {
    pub fn new(ctx: Context) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl Gateway for SerenityGateway {
    async fn send_text(&self, channel_id: ChannelId, content: &str) -> Result<(), AppError> {
        channel_id.say(&self.ctx, content).await?;
        Ok(())
    }

    async fn send_notice(&self, channel_id: ChannelId, notice: &Notice) -> Result<(), AppError> {
        let embed = build_embed(notice)?;

        channel_id
            .send_message(&self.ctx, CreateMessage::new().embed(embed))
            .await?;

        Ok(())
    }

    async fn resolve_channel(&self, channel_id: ChannelId) -> Option<ResolvedChannel> {
        match channel_id.to_channel(&self.ctx).await {
            Ok(Channel::Guild(channel)) => Some(ResolvedChannel {
                id: channel.id,
                is_text: matches!(channel.kind, ChannelType::Text | ChannelType::News),
                name: channel.name,
            }),
            Ok(_) => None,
            Err(e) => {
                tracing::debug!("Failed to resolve channel {}: {}", channel_id, e);
                None
            }
        }
    }

    async fn guild_summary(&self, guild_id: GuildId) -> Option<GuildSummary> {
        // Prefer the cache, fall back to the API if the guild is not cached
        let cached = self.ctx.cache.guild(guild_id).map(|guild| GuildSummary {
            name: guild.name.clone(),
            icon_url: guild.icon_url(),
        });
        if cached.is_some() {
            return cached;
        }

        match guild_id.to_partial_guild(&self.ctx).await {
            Ok(guild) => Some(GuildSummary {
                icon_url: guild.icon_url(),
                name: guild.name,
            }),
            Err(e) => {
                tracing::warn!("Failed to fetch guild {}: {}", guild_id, e);
                None
            }
        }
    }

    async fn fetch_ban_reason(
        &self,
        guild_id: GuildId,
        user_id: UserId,
    ) -> Result<Option<String>, AppError> {
        let ban = guild_id.get_ban(&self.ctx.http, user_id).await?;

        Ok(ban.and_then(|ban| ban.reason))
    }
}

/// Converts a notice into a Discord embed.
///
/// # Arguments
/// - `notice` - Notice built by the service layer
///
/// # Returns
/// - `Ok(CreateEmbed)` - Discord embed ready for posting
/// - `Err(AppError::InternalErr)` - Notice timestamp is outside Discord's range
pub fn build_embed(notice: &Notice) -> Result<CreateEmbed, AppError> {
    let mut embed = CreateEmbed::new()
        .title(&notice.title)
        .color(notice.color);

    if let Some(description) = &notice.description {
        embed = embed.description(description);
    }

    for field in &notice.fields {
        embed = embed.field(&field.name, &field.value, field.inline);
    }

    if let Some(url) = &notice.thumbnail {
        embed = embed.thumbnail(url);
    }

    if let Some(url) = &notice.image {
        embed = embed.image(url);
    }

    if let Some(footer) = &notice.footer {
        embed = embed.footer(CreateEmbedFooter::new(footer));
    }

    if let Some(at) = notice.timestamp {
        let timestamp = Timestamp::from_unix_timestamp(at.timestamp()).map_err(|e| {
            InternalError::InvalidDiscordTimestamp {
                timestamp: at.timestamp(),
                reason: e.to_string(),
            }
        })?;
        embed = embed.timestamp(timestamp);
    }

    Ok(embed)
}
