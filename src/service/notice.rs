//! Notice builders for the welcome message and the audit log.
//!
//! These are pure functions over domain models so the exact layout can be tested without
//! a gateway. The current time is passed in by the caller.

use chrono::{DateTime, Utc};

use crate::{
    gateway::GuildSummary,
    model::{
        event::{MemberBanned, MemberJoined, MemberRemoved},
        notice::Notice,
        user::UserProfile,
    },
};

pub const WELCOME_COLOR: u32 = 0x5865f2;
pub const MEMBER_JOINED_COLOR: u32 = 0x2ecc71;
pub const MEMBER_LEFT_COLOR: u32 = 0xf39c12;
pub const MEMBER_BANNED_COLOR: u32 = 0xe74c3c;

pub const NOT_AVAILABLE: &str = "Not available";
pub const NO_REASON: &str = "No reason provided";

/// Onboarding channel references, each already rendered as a channel mention or as its
/// fallback name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingLinks {
    pub roles: String,
    pub introductions: String,
    pub info: String,
    pub lounge: String,
}

/// Formats a timestamp the way every audit log field shows it.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Builds the welcome notice for a new member.
///
/// # Arguments
/// - `member` - The member who joined
/// - `guild` - Guild name and icon, if the guild could be looked up
/// - `links` - Rendered onboarding channel references
/// - `now` - Timestamp shown on the notice
///
/// # Returns
/// - `Notice` - Welcome notice greeting the member by mention
pub fn welcome_notice(
    member: &UserProfile,
    guild: Option<&GuildSummary>,
    links: &OnboardingLinks,
    now: DateTime<Utc>,
) -> Notice {
    let guild_name = guild.map_or("the server", |guild| guild.name.as_str());

    let mut notice = Notice::new(format!("Welcome to {}!", guild_name))
        .description(format!(
            "Hey {}, welcome to **{}**! We're glad to have you here.",
            member.mention(),
            guild_name
        ))
        .color(WELCOME_COLOR)
        .field("Pick your roles", &links.roles, true)
        .field("Introduce yourself", &links.introductions, true)
        .field("Server info", &links.info, true)
        .field("Come hang out", &links.lounge, true)
        .thumbnail(&member.avatar_url)
        .footer(format!("{} joined {}", member.tag, guild_name))
        .timestamp(now);

    if let Some(icon_url) = guild.and_then(|guild| guild.icon_url.as_ref()) {
        notice = notice.image(icon_url);
    }

    notice
}

/// Shared identity fields of every audit log notice.
fn identity_fields(notice: Notice, user: &UserProfile) -> Notice {
    notice
        .field("User", &user.tag, true)
        .field("User ID", user.id.to_string(), true)
        .field("Account Created", format_timestamp(&user.created_at), false)
        .thumbnail(&user.avatar_url)
}

pub fn member_joined_notice(event: &MemberJoined, now: DateTime<Utc>) -> Notice {
    let joined_at = event
        .joined_at
        .as_ref()
        .map_or_else(|| NOT_AVAILABLE.to_string(), format_timestamp);

    identity_fields(
        Notice::new("Member Joined")
            .description(format!("{} joined the server.", event.member.mention()))
            .color(MEMBER_JOINED_COLOR),
        &event.member,
    )
    .field("Joined Server", joined_at, false)
    .footer(format!("ID: {}", event.member.id))
    .timestamp(now)
}

pub fn member_left_notice(event: &MemberRemoved) -> Notice {
    identity_fields(
        Notice::new("Member Left")
            .description(format!("{} left the server.", event.user.mention()))
            .color(MEMBER_LEFT_COLOR),
        &event.user,
    )
    .field("Left At", format_timestamp(&event.left_at), false)
    .footer(format!("ID: {}", event.user.id))
    .timestamp(event.left_at)
}

/// Builds the ban notice. `reason` is `None` when the ban has no reason or the ban
/// record could not be fetched.
pub fn member_banned_notice(
    event: &MemberBanned,
    reason: Option<&str>,
    now: DateTime<Utc>,
) -> Notice {
    Notice::new("Member Banned")
        .description(format!("{} was banned from the server.", event.user.mention()))
        .color(MEMBER_BANNED_COLOR)
        .field("User", &event.user.tag, true)
        .field("User ID", event.user.id.to_string(), true)
        .field("Reason", reason.unwrap_or(NO_REASON), false)
        .thumbnail(&event.user.avatar_url)
        .footer(format!("ID: {}", event.user.id))
        .timestamp(now)
}
