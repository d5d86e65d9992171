//! Typed bot commands.
//!
//! A command message is the prefix character, a command name and at most one argument
//! token, e.g. `^afk on`. Parsing happens in two steps so that the administrator check
//! can run after the command name is known but before the argument is validated:
//! `Invocation::parse` finds the command, `Invocation::command` validates its argument.

use std::fmt;

use crate::{config::COMMAND_PREFIX, error::command::CommandError, model::toggle::Toggle};

/// Names of all commands the bot answers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandName {
    /// `^afk {on|off}` - toggle the caller's away status
    Afk,
    /// `^welcome {on|off}` - toggle the welcome notice (administrator only)
    Welcome,
    /// `^datato {on|off}` - toggle the audit log (administrator only)
    Datato,
    /// `^help` - list the commands
    Help,
}

impl CommandName {
    pub const ALL: [CommandName; 4] = [Self::Afk, Self::Welcome, Self::Datato, Self::Help];

    /// Matches a command name exactly as typed after the prefix.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Afk => "afk",
            Self::Welcome => "welcome",
            Self::Datato => "datato",
            Self::Help => "help",
        }
    }

    /// Whether only the administrator may run this command.
    pub fn requires_admin(&self) -> bool {
        matches!(self, Self::Welcome | Self::Datato)
    }

    /// One-line usage text shown by `^help`.
    pub fn usage(&self) -> &'static str {
        match self {
            Self::Afk => "`^afk on` / `^afk off` - mark or unmark yourself as AFK",
            Self::Welcome => {
                "`^welcome on` / `^welcome off` - send welcome messages to this channel (admin only)"
            }
            Self::Datato => {
                "`^datato on` / `^datato off` - log member joins, leaves and bans to this channel (admin only)"
            }
            Self::Help => "`^help` - show this message",
        }
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully validated command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Afk(Toggle),
    Welcome(Toggle),
    Datato(Toggle),
    Help,
}

/// A recognised command name with its raw argument, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub name: CommandName,
    pub argument: Option<String>,
}

impl Invocation {
    /// Splits a message into a command name and its first argument token.
    ///
    /// Tokens after the first argument are ignored.
    ///
    /// # Arguments
    /// - `content` - Raw message content
    ///
    /// # Returns
    /// - `Ok(Invocation)` - Message starts with the prefix and a known command name
    /// - `Err(CommandError::NotACommand)` - No prefix, or nothing after it
    /// - `Err(CommandError::UnknownCommand)` - Prefix followed by an unknown name
    pub fn parse(content: &str) -> Result<Self, CommandError> {
        let body = content
            .strip_prefix(COMMAND_PREFIX)
            .ok_or(CommandError::NotACommand)?;

        // "^ afk" is not a command: the name must follow the prefix directly
        if body.starts_with(char::is_whitespace) {
            return Err(CommandError::NotACommand);
        }

        let mut tokens = body.split_whitespace();
        let name = tokens.next().ok_or(CommandError::NotACommand)?;

        let name = CommandName::from_name(name)
            .ok_or_else(|| CommandError::UnknownCommand(name.to_string()))?;

        Ok(Self {
            name,
            argument: tokens.next().map(str::to_string),
        })
    }

    /// Validates the argument and produces the typed command.
    ///
    /// # Returns
    /// - `Ok(Command)` - Argument is valid for this command
    /// - `Err(CommandError::MissingArgument)` - Toggle command without an argument
    /// - `Err(CommandError::InvalidToggle)` - Argument is not `on`/`off`
    pub fn command(&self) -> Result<Command, CommandError> {
        let toggle = match self.name {
            CommandName::Help => return Ok(Command::Help),
            command => {
                let value = self
                    .argument
                    .as_deref()
                    .ok_or(CommandError::MissingArgument { command })?;

                Toggle::parse(value).ok_or_else(|| CommandError::InvalidToggle {
                    command,
                    value: value.to_string(),
                })?
            }
        };

        Ok(match self.name {
            CommandName::Afk => Command::Afk(toggle),
            CommandName::Welcome => Command::Welcome(toggle),
            CommandName::Datato => Command::Datato(toggle),
            CommandName::Help => Command::Help,
        })
    }
}
