//! Membership event handlers: welcome notice and audit log for joins, leaves and bans.
//!
//! Every handler first checks the relevant toggle and that its target channel still
//! resolves to a text channel. A channel that was deleted, or that the bot can no longer
//! see, is skipped silently.

use chrono::Utc;
use serenity::all::ChannelId;

use crate::{
    config::{self, OnboardingChannel},
    error::AppError,
    gateway::Gateway,
    model::{
        event::{MemberBanned, MemberJoined, MemberRemoved},
        toggle::FeatureToggle,
    },
    service::notice::{self, OnboardingLinks},
    state::SessionState,
};

pub struct MemberService<'a, G: Gateway> {
    state: &'a SessionState,
    gateway: &'a G,
}

impl<'a, G: Gateway> MemberService<'a, G> {
    pub fn new(state: &'a SessionState, gateway: &'a G) -> Self {
        Self { state, gateway }
    }

    /// Handles a member joining a guild.
    ///
    /// Sends the welcome notice if welcome is on, and the "Member Joined" log notice if
    /// logging is on. Both are attempted even if the first send fails.
    ///
    /// # Returns
    /// - `Ok(())` - All enabled notices were sent or skipped
    /// - `Err(AppError)` - The first failed send
    pub async fn member_joined(&self, event: &MemberJoined) -> Result<(), AppError> {
        let now = Utc::now();

        let welcome = match self.target_channel(self.state.welcome().await).await {
            Some(channel_id) => {
                let guild = self.gateway.guild_summary(event.guild_id).await;
                let links = self.onboarding_links().await;
                let notice = notice::welcome_notice(&event.member, guild.as_ref(), &links, now);

                tracing::debug!(
                    "Welcoming user {} in channel {}",
                    event.member.id,
                    channel_id
                );
                self.gateway.send_notice(channel_id, &notice).await
            }
            None => Ok(()),
        };

        let log = match self.target_channel(self.state.logging().await).await {
            Some(channel_id) => {
                let notice = notice::member_joined_notice(event, now);
                self.gateway.send_notice(channel_id, &notice).await
            }
            None => Ok(()),
        };

        welcome.and(log)
    }

    /// Handles a member leaving (or being kicked from) a guild.
    pub async fn member_removed(&self, event: &MemberRemoved) -> Result<(), AppError> {
        let Some(channel_id) = self.target_channel(self.state.logging().await).await else {
            return Ok(());
        };

        let notice = notice::member_left_notice(event);
        self.gateway.send_notice(channel_id, &notice).await
    }

    /// Handles a user being banned from a guild.
    ///
    /// The ban reason is looked up after the fact; if the lookup fails (for example the
    /// user was unbanned in the meantime) the notice says no reason was provided.
    pub async fn member_banned(&self, event: &MemberBanned) -> Result<(), AppError> {
        let Some(channel_id) = self.target_channel(self.state.logging().await).await else {
            return Ok(());
        };

        let reason = match self
            .gateway
            .fetch_ban_reason(event.guild_id, event.user.id)
            .await
        {
            Ok(reason) => reason,
            Err(e) => {
                tracing::debug!(
                    "Failed to fetch ban for user {} in guild {}: {}",
                    event.user.id,
                    event.guild_id,
                    e
                );
                None
            }
        };

        let notice = notice::member_banned_notice(event, reason.as_deref(), Utc::now());
        self.gateway.send_notice(channel_id, &notice).await
    }

    /// Returns the toggle's channel if the toggle is on and the channel is a text
    /// channel the bot can still reach.
    async fn target_channel(&self, toggle: FeatureToggle) -> Option<ChannelId> {
        let channel_id = toggle.channel_id()?;

        match self.gateway.resolve_channel(channel_id).await {
            Some(channel) if channel.is_text => Some(channel.id),
            Some(channel) => {
                tracing::debug!(
                    "Target channel #{} ({}) is not a text channel, skipping",
                    channel.name,
                    channel_id
                );
                None
            }
            None => {
                tracing::debug!("Target channel {} no longer resolves, skipping", channel_id);
                None
            }
        }
    }

    async fn onboarding_links(&self) -> OnboardingLinks {
        OnboardingLinks {
            roles: self.channel_reference(config::ROLES_CHANNEL).await,
            introductions: self.channel_reference(config::INTRODUCTIONS_CHANNEL).await,
            info: self.channel_reference(config::INFO_CHANNEL).await,
            lounge: self.channel_reference(config::LOUNGE_CHANNEL).await,
        }
    }

    /// Channel mention if the channel resolves, otherwise its fallback name.
    async fn channel_reference(&self, channel: OnboardingChannel) -> String {
        match self.gateway.resolve_channel(channel.id()).await {
            Some(resolved) => resolved.mention(),
            None => channel.fallback.to_string(),
        }
    }
}
