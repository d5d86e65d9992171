//! Session state shared by every event handler.
//!
//! Holds the away set and the two admin toggles. Nothing here is persisted: a restart
//! starts with nobody away and both features off. Serenity runs each gateway event on
//! its own task, so all access goes through a `tokio::sync::RwLock`.

use std::collections::HashSet;
use std::sync::Arc;

use serenity::all::{ChannelId, UserId};
use tokio::sync::RwLock;

use crate::model::toggle::FeatureToggle;

#[derive(Debug, Default)]
struct SessionData {
    away: HashSet<UserId>,
    welcome: FeatureToggle,
    logging: FeatureToggle,
}

/// Process-wide bot state, cheap to clone.
///
/// Constructed once at startup and handed to the Serenity event handler; clones share
/// the same underlying data.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    inner: Arc<RwLock<SessionData>>,
}

impl SessionState {
    /// Creates an empty state: nobody away, welcome and logging off.
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub async fn is_away(&self, user_id: UserId) -> bool {
        self.inner.read().await.away.contains(&user_id)
    }

    /// Marks a user as away.
    ///
    /// # Returns
    /// - `true` - User was added
    /// - `false` - User was already away, nothing changed
    pub async fn set_away(&self, user_id: UserId) -> bool {
        self.inner.write().await.away.insert(user_id)
    }

    /// Clears a user's away status.
    ///
    /// # Returns
    /// - `true` - User was away and has been removed
    /// - `false` - User was not away
    pub async fn clear_away(&self, user_id: UserId) -> bool {
        self.inner.write().await.away.remove(&user_id)
    }

    /// Applies a new message to the away set in one critical section.
    ///
    /// Removes the author from the away set, then walks `mentions` in order and collects
    /// every distinct mentioned user who is still away. Because the author is removed
    /// first, a self-mention never counts. Holding the write lock across both steps keeps
    /// a concurrent `afk on` from landing between them.
    ///
    /// # Arguments
    /// - `author` - Author of the message
    /// - `mentions` - Mentioned user ids in message order, duplicates allowed
    ///
    /// # Returns
    /// - `(bool, Vec<UserId>)` - Whether the author was cleared, and the away users to
    ///   announce, each at most once, in first-mention order
    pub async fn settle_message(&self, author: UserId, mentions: &[UserId]) -> (bool, Vec<UserId>) {
        let mut data = self.inner.write().await;

        let author_cleared = data.away.remove(&author);

        let mut notified = HashSet::new();
        let away_mentions = mentions
            .iter()
            .copied()
            .filter(|user_id| data.away.contains(user_id) && notified.insert(*user_id))
            .collect();

        (author_cleared, away_mentions)
    }

    pub async fn welcome(&self) -> FeatureToggle {
        self.inner.read().await.welcome
    }

    /// Turns the welcome notice on in `channel_id`, or off when `None`.
    pub async fn set_welcome(&self, channel_id: Option<ChannelId>) {
        self.inner.write().await.welcome = toggle_for(channel_id);
    }

    pub async fn logging(&self) -> FeatureToggle {
        self.inner.read().await.logging
    }

    /// Turns the audit log on in `channel_id`, or off when `None`.
    pub async fn set_logging(&self, channel_id: Option<ChannelId>) {
        self.inner.write().await.logging = toggle_for(channel_id);
    }
}

fn toggle_for(channel_id: Option<ChannelId>) -> FeatureToggle {
    match channel_id {
        Some(channel_id) => FeatureToggle::enabled_in(channel_id),
        None => FeatureToggle::disabled(),
    }
}
