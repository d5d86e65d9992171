//! Discord bot integration.
//!
//! This module connects the services to Discord through Serenity. Gateway callbacks are
//! converted into typed `BotEvent`s and handed to the service layer's dispatcher, and
//! `SerenityGateway` implements the outbound `Gateway` seam on top of the callback's
//! `Context`.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild and channel data for resolving target channels
//! - `GUILD_MESSAGES` / `DIRECT_MESSAGES` - Receive messages for AFK handling and commands
//! - `MESSAGE_CONTENT` - Read message text to parse commands (privileged intent)
//! - `GUILD_MEMBERS` - Receive member join and leave events (privileged intent)
//! - `GUILD_MODERATION` - Receive ban events
//!
//! Note: `MESSAGE_CONTENT` and `GUILD_MEMBERS` are privileged intents and must be
//! explicitly enabled in the Discord Developer Portal for the bot application.

pub mod gateway;
pub mod handler;
pub mod start;
