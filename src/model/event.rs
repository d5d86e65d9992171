//! Typed gateway events handled by the bot.
//!
//! The bot layer converts Serenity callbacks into a `BotEvent` and hands it to the
//! service layer's dispatcher. Each variant carries only what its handler reads.

use chrono::{DateTime, Utc};
use serenity::all::{ChannelId, GuildId, Member, Message, User, UserId};

use crate::model::user::{timestamp_to_utc, UserProfile};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotEvent {
    MessageCreated(InboundMessage),
    MemberJoined(MemberJoined),
    MemberRemoved(MemberRemoved),
    MemberBanned(MemberBanned),
}

/// A chat message as seen by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub author: UserProfile,
    pub channel_id: ChannelId,
    pub guild_id: Option<GuildId>,
    pub content: String,
    /// Mentioned users in message order, duplicates included
    pub mentions: Vec<UserProfile>,
}

impl InboundMessage {
    /// Ids of the mentioned users in message order.
    pub fn mention_ids(&self) -> Vec<UserId> {
        self.mentions.iter().map(|user| user.id).collect()
    }
}

impl From<&Message> for InboundMessage {
    fn from(message: &Message) -> Self {
        let mut author = UserProfile::from(&message.author);
        if let Some(nick) = message.member.as_ref().and_then(|member| member.nick.clone()) {
            author.display_name = nick;
        }

        Self {
            author,
            channel_id: message.channel_id,
            guild_id: message.guild_id,
            content: message.content.clone(),
            mentions: message.mentions.iter().map(UserProfile::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberJoined {
    pub guild_id: GuildId,
    pub member: UserProfile,
    /// When the member joined the guild, if Discord reported it
    pub joined_at: Option<DateTime<Utc>>,
}

impl From<&Member> for MemberJoined {
    fn from(member: &Member) -> Self {
        Self {
            guild_id: member.guild_id,
            member: UserProfile::from(member),
            joined_at: member.joined_at.map(timestamp_to_utc),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRemoved {
    pub guild_id: GuildId,
    pub user: UserProfile,
    pub left_at: DateTime<Utc>,
}

impl MemberRemoved {
    pub fn new(guild_id: GuildId, user: &User, left_at: DateTime<Utc>) -> Self {
        Self {
            guild_id,
            user: UserProfile::from(user),
            left_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberBanned {
    pub guild_id: GuildId,
    pub user: UserProfile,
}

impl MemberBanned {
    pub fn new(guild_id: GuildId, user: &User) -> Self {
        Self {
            guild_id,
            user: UserProfile::from(user),
        }
    }
}
