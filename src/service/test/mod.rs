use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serenity::all::{ChannelId, GuildId, UserId};
use serenity::async_trait;

use crate::{
    config::ADMIN_USER_ID,
    error::AppError,
    gateway::{Gateway, GuildSummary, ResolvedChannel},
    model::{
        event::{BotEvent, InboundMessage},
        notice::Notice,
        user::UserProfile,
    },
    service::EventDispatcher,
    state::SessionState,
};

mod command;

/// Outcome of a ban lookup on the recording gateway.
enum BanLookup {
    Found(Option<String>),
    Failed,
}

/// Gateway double that records everything sent and answers lookups from fixed data.
struct RecordingGateway {
    texts: Mutex<Vec<(ChannelId, String)>>,
    notices: Mutex<Vec<(ChannelId, Notice)>>,
    channels: HashMap<ChannelId, ResolvedChannel>,
    guild: Option<GuildSummary>,
    ban: BanLookup,
    /// Number of upcoming sends, text or notice, that fail without being recorded
    failing_sends: Mutex<usize>,
}

impl RecordingGateway {
    fn new() -> Self {
        Self {
            texts: Mutex::new(Vec::new()),
            notices: Mutex::new(Vec::new()),
            channels: HashMap::new(),
            guild: None,
            ban: BanLookup::Found(None),
            failing_sends: Mutex::new(0),
        }
    }

    fn with_channel(mut self, id: u64, is_text: bool) -> Self {
        let id = ChannelId::new(id);
        self.channels.insert(
            id,
            ResolvedChannel {
                id,
                name: format!("channel-{}", id),
                is_text,
            },
        );
        self
    }

    fn with_text_channel(self, id: u64) -> Self {
        self.with_channel(id, true)
    }

    fn with_guild(mut self, name: &str) -> Self {
        self.guild = Some(GuildSummary {
            name: name.to_string(),
            icon_url: None,
        });
        self
    }

    fn with_ban_reason(mut self, reason: Option<&str>) -> Self {
        self.ban = BanLookup::Found(reason.map(str::to_string));
        self
    }

    fn with_failing_ban_lookup(mut self) -> Self {
        self.ban = BanLookup::Failed;
        self
    }

    fn with_failing_sends(self, count: usize) -> Self {
        *self.failing_sends.lock().unwrap() = count;
        self
    }

    /// Consumes one pending failure, if any.
    fn send_failure(&self) -> Option<AppError> {
        let mut remaining = self.failing_sends.lock().unwrap();
        if *remaining == 0 {
            return None;
        }
        *remaining -= 1;
        Some(serenity::Error::Other("Missing Access").into())
    }

    fn texts(&self) -> Vec<(ChannelId, String)> {
        self.texts.lock().unwrap().clone()
    }

    fn notices(&self) -> Vec<(ChannelId, Notice)> {
        self.notices.lock().unwrap().clone()
    }
}

#[async_trait]
impl Gateway for RecordingGateway {
    async fn send_text(&self, channel_id: ChannelId, content: &str) -> Result<(), AppError> {
        if let Some(e) = self.send_failure() {
            return Err(e);
        }
        self.texts
            .lock()
            .unwrap()
            .push((channel_id, content.to_string()));
        Ok(())
    }

    async fn send_notice(&self, channel_id: ChannelId, notice: &Notice) -> Result<(), AppError> {
        if let Some(e) = self.send_failure() {
            return Err(e);
        }
        self.notices
            .lock()
            .unwrap()
            .push((channel_id, notice.clone()));
        Ok(())
    }

    async fn resolve_channel(&self, channel_id: ChannelId) -> Option<ResolvedChannel> {
        self.channels.get(&channel_id).cloned()
    }

    async fn guild_summary(&self, _guild_id: GuildId) -> Option<GuildSummary> {
        self.guild.clone()
    }

    async fn fetch_ban_reason(
        &self,
        _guild_id: GuildId,
        _user_id: UserId,
    ) -> Result<Option<String>, AppError> {
        match &self.ban {
            BanLookup::Found(reason) => Ok(reason.clone()),
            BanLookup::Failed => Err(serenity::Error::Other("Unknown Ban").into()),
        }
    }
}

const GUILD_ID: u64 = 700000000000000001;

fn profile(id: u64, name: &str) -> UserProfile {
    UserProfile {
        id: UserId::new(id),
        display_name: name.to_string(),
        tag: name.to_lowercase(),
        avatar_url: format!("https://cdn.discordapp.com/avatars/{}/a.png", id),
        created_at: DateTime::parse_from_rfc3339("2021-06-07T08:09:10Z")
            .unwrap()
            .with_timezone(&Utc),
        bot: false,
    }
}

fn admin() -> UserProfile {
    profile(ADMIN_USER_ID, "Admin")
}

fn message(author: &UserProfile, channel_id: u64, content: &str) -> InboundMessage {
    message_with_mentions(author, channel_id, content, Vec::new())
}

fn message_with_mentions(
    author: &UserProfile,
    channel_id: u64,
    content: &str,
    mentions: Vec<UserProfile>,
) -> InboundMessage {
    InboundMessage {
        author: author.clone(),
        channel_id: ChannelId::new(channel_id),
        guild_id: Some(GuildId::new(GUILD_ID)),
        content: content.to_string(),
        mentions,
    }
}

/// Dispatches a message through the full event path.
async fn send(state: &SessionState, gateway: &RecordingGateway, message: InboundMessage) {
    EventDispatcher::new(state, gateway)
        .dispatch(BotEvent::MessageCreated(message))
        .await
        .unwrap();
}
