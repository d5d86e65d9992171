//! Inbound message handling: away clearing, away mention notices, then commands.

use crate::{
    error::AppError,
    gateway::Gateway,
    model::event::InboundMessage,
    service::command::CommandService,
    state::SessionState,
};

pub struct MessageService<'a, G: Gateway> {
    state: &'a SessionState,
    gateway: &'a G,
}

impl<'a, G: Gateway> MessageService<'a, G> {
    pub fn new(state: &'a SessionState, gateway: &'a G) -> Self {
        Self { state, gateway }
    }

    /// Handles a message created in any channel the bot can read.
    ///
    /// Messages from bot accounts are dropped without touching state. Otherwise the
    /// author's away status is cleared silently, one "is AFK" notice is sent per distinct
    /// away user mentioned, and the message is passed on to command dispatch. A failed
    /// notice is logged and does not stop the remaining notices or the command.
    ///
    /// # Arguments
    /// - `message` - The inbound message
    ///
    /// # Returns
    /// - `Ok(())` - Message handled
    /// - `Err(AppError)` - Sending the command reply failed
    pub async fn handle_message(&self, message: &InboundMessage) -> Result<(), AppError> {
        if message.author.bot {
            return Ok(());
        }

        let (author_cleared, away_mentions) = self
            .state
            .settle_message(message.author.id, &message.mention_ids())
            .await;

        if author_cleared {
            tracing::debug!("User {} is back, AFK cleared", message.author.id);
        }

        for user_id in away_mentions {
            let Some(user) = message.mentions.iter().find(|user| user.id == user_id) else {
                continue;
            };

            let notice = format!("{} is AFK", user.display_name);
            if let Err(e) = self.gateway.send_text(message.channel_id, &notice).await {
                tracing::error!(
                    "Failed to send AFK notice for user {} in channel {}: {}",
                    user_id,
                    message.channel_id,
                    e
                );
            }
        }

        CommandService::new(self.state, self.gateway)
            .handle_command(message)
            .await
    }
}
