use thiserror::Error;

use crate::model::command::CommandName;

/// Failures while turning a chat message into a typed command.
///
/// None of these are fatal. `NotACommand` and `UnknownCommand` are dropped silently,
/// argument errors are answered with the command's usage reply.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The message does not start with the command prefix.
    #[error("Message is not a command")]
    NotACommand,

    /// The prefix was followed by a name that no command answers to.
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    /// A command that takes an on/off argument was invoked without one.
    #[error("Command '{command}' requires an on/off argument")]
    MissingArgument {
        /// The command that was invoked
        command: CommandName,
    },

    /// The argument was present but is neither `on` nor `off`.
    #[error("Invalid argument '{value}' for command '{command}'")]
    InvalidToggle {
        /// The command that was invoked
        command: CommandName,
        /// The argument as typed by the caller
        value: String,
    },
}
