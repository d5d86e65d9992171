//! Command handlers for `afk`, `welcome`, `datato` and `help`.

use serenity::all::ChannelId;

use crate::{
    config,
    error::{command::CommandError, AppError},
    gateway::Gateway,
    model::{
        command::{Command, CommandName, Invocation},
        event::InboundMessage,
        toggle::Toggle,
        user::UserProfile,
    },
    state::SessionState,
};

pub const UNAUTHORIZED_REPLY: &str = "You are not authorized to use this command.";

/// Executes commands parsed from chat messages.
pub struct CommandService<'a, G: Gateway> {
    state: &'a SessionState,
    gateway: &'a G,
}

impl<'a, G: Gateway> CommandService<'a, G> {
    pub fn new(state: &'a SessionState, gateway: &'a G) -> Self {
        Self { state, gateway }
    }

    /// Parses and runs the command in a message, replying in the same channel.
    ///
    /// Messages that are not commands, or name an unknown command, are ignored. For
    /// administrator-only commands the caller is checked before the argument, so an
    /// unauthorized caller is always told so regardless of what they typed.
    ///
    /// # Arguments
    /// - `message` - The inbound message, already cleared of away handling
    ///
    /// # Returns
    /// - `Ok(())` - Message was not a command, or the reply was sent
    /// - `Err(AppError)` - Sending the reply failed
    pub async fn handle_command(&self, message: &InboundMessage) -> Result<(), AppError> {
        let invocation = match Invocation::parse(&message.content) {
            Ok(invocation) => invocation,
            Err(CommandError::NotACommand) => return Ok(()),
            Err(err) => {
                tracing::debug!("Ignoring message from {}: {}", message.author.id, err);
                return Ok(());
            }
        };

        if invocation.name.requires_admin() && !config::is_admin(message.author.id) {
            tracing::info!(
                "User {} attempted admin command '{}' in guild {:?}",
                message.author.id,
                invocation.name,
                message.guild_id
            );
            return self
                .gateway
                .send_text(message.channel_id, UNAUTHORIZED_REPLY)
                .await;
        }

        let reply = match invocation.command() {
            Ok(command) => self.execute(command, &message.author, message.channel_id).await,
            Err(err) => {
                tracing::debug!("Rejected command from {}: {}", message.author.id, err);
                invalid_argument_reply(invocation.name)
            }
        };

        self.gateway.send_text(message.channel_id, &reply).await
    }

    /// Runs a validated command and returns the reply text.
    ///
    /// Authorization must already have been checked by the caller.
    pub async fn execute(
        &self,
        command: Command,
        caller: &UserProfile,
        channel_id: ChannelId,
    ) -> String {
        match command {
            Command::Afk(toggle) => self.toggle_away(caller, toggle).await,
            Command::Welcome(toggle) => self.toggle_welcome(channel_id, toggle).await,
            Command::Datato(toggle) => self.toggle_logging(channel_id, toggle).await,
            Command::Help => help_reply(),
        }
    }

    /// Marks or unmarks the caller as away.
    ///
    /// # Returns
    /// - `String` - Confirmation reply mentioning the caller
    pub async fn toggle_away(&self, caller: &UserProfile, toggle: Toggle) -> String {
        let mention = caller.mention();

        match toggle {
            Toggle::On => {
                if self.state.set_away(caller.id).await {
                    tracing::debug!("User {} is now AFK", caller.id);
                    format!("{} is now AFK.", mention)
                } else {
                    format!("{}, you are already AFK.", mention)
                }
            }
            Toggle::Off => {
                if self.state.clear_away(caller.id).await {
                    tracing::debug!("User {} is no longer AFK", caller.id);
                    format!("{}, you are no longer AFK.", mention)
                } else {
                    format!("{}, you are not AFK.", mention)
                }
            }
        }
    }

    /// Enables welcome notices in `channel_id`, or disables them.
    pub async fn toggle_welcome(&self, channel_id: ChannelId, toggle: Toggle) -> String {
        match toggle {
            Toggle::On => {
                self.state.set_welcome(Some(channel_id)).await;
                tracing::info!("Welcome messages enabled in channel {}", channel_id);
                format!("Welcome messages enabled in <#{}>.", channel_id)
            }
            Toggle::Off => {
                self.state.set_welcome(None).await;
                tracing::info!("Welcome messages disabled");
                "Welcome messages disabled.".to_string()
            }
        }
    }

    /// Enables the audit log in `channel_id`, or disables it.
    pub async fn toggle_logging(&self, channel_id: ChannelId, toggle: Toggle) -> String {
        match toggle {
            Toggle::On => {
                self.state.set_logging(Some(channel_id)).await;
                tracing::info!("Data logging enabled in channel {}", channel_id);
                format!("Data logging enabled in <#{}>.", channel_id)
            }
            Toggle::Off => {
                self.state.set_logging(None).await;
                tracing::info!("Data logging disabled");
                "Data logging disabled.".to_string()
            }
        }
    }
}

/// Reply for a toggle command whose argument is missing or not `on`/`off`.
pub fn invalid_argument_reply(command: CommandName) -> String {
    match command {
        CommandName::Afk => "Invalid usage. Use '^afk on' or '^afk off'.".to_string(),
        command => format!(
            "Invalid option. Use '^{} on' or '^{} off'.",
            command, command
        ),
    }
}

pub fn help_reply() -> String {
    let mut reply = String::from("**Commands**");
    for command in CommandName::ALL {
        reply.push('\n');
        reply.push_str(command.usage());
    }
    reply
}
