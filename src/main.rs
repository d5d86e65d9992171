//! Warden - a small Discord community bot.
//!
//! Features:
//! - `^afk on|off` - away status, cleared automatically on the user's next message, with
//!   a notice when someone mentions an away user
//! - `^welcome on|off` - welcome notice for new members (administrator only)
//! - `^datato on|off` - audit log of joins, leaves and bans (administrator only)
//!
//! ## Architecture
//!
//! - `config` - Environment configuration and compiled-in ids
//! - `error` - Error types
//! - `state` - In-memory session state shared by all handlers
//! - `model` - Commands, events and notices
//! - `gateway` - Outbound platform seam
//! - `service` - Event handling logic
//! - `bot` - Serenity client, event handler and gateway implementation

mod bot;
mod config;
mod error;
mod gateway;
mod model;
mod service;
mod state;

use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError, state::SessionState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let state = SessionState::new();

    let client = bot::start::init_bot(&config, state).await?;
    bot::start::start_bot(client).await
}
