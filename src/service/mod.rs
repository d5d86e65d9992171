//! Event handling logic.
//!
//! Services hold a reference to the session state and to a `Gateway` and implement one
//! concern each. `EventDispatcher` routes a typed `BotEvent` to the matching service;
//! services never call each other except for the message service forwarding the
//! message to command dispatch once away handling is done.

pub mod command;
pub mod member;
pub mod message;
pub mod notice;

#[cfg(test)]
mod test;

use crate::{
    error::AppError,
    gateway::Gateway,
    model::event::BotEvent,
    service::{member::MemberService, message::MessageService},
    state::SessionState,
};

/// Routes gateway events to their handlers.
pub struct EventDispatcher<'a, G: Gateway> {
    state: &'a SessionState,
    gateway: &'a G,
}

impl<'a, G: Gateway> EventDispatcher<'a, G> {
    /// Creates a new EventDispatcher instance.
    ///
    /// # Arguments
    /// - `state` - Shared session state
    /// - `gateway` - Outbound platform access for the event being handled
    pub fn new(state: &'a SessionState, gateway: &'a G) -> Self {
        Self { state, gateway }
    }

    /// Handles one event.
    ///
    /// # Returns
    /// - `Ok(())` - Event handled (including events that required no action)
    /// - `Err(AppError)` - Sending a reply or notice failed
    pub async fn dispatch(&self, event: BotEvent) -> Result<(), AppError> {
        match event {
            BotEvent::MessageCreated(message) => {
                MessageService::new(self.state, self.gateway)
                    .handle_message(&message)
                    .await
            }
            BotEvent::MemberJoined(event) => {
                MemberService::new(self.state, self.gateway)
                    .member_joined(&event)
                    .await
            }
            BotEvent::MemberRemoved(event) => {
                MemberService::new(self.state, self.gateway)
                    .member_removed(&event)
                    .await
            }
            BotEvent::MemberBanned(event) => {
                MemberService::new(self.state, self.gateway)
                    .member_banned(&event)
                    .await
            }
        }
    }
}
