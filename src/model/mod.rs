//! Domain models shared by the state, service and bot layers.
//!
//! Serenity payloads are converted into these types at the edge of the bot layer so the
//! services only deal with the fields they actually use.

pub mod command;
pub mod event;
pub mod notice;
pub mod toggle;
pub mod user;
