use chrono::Utc;
use serenity::all::{Context, GuildId, Member, User, UserId};

use crate::{
    bot::gateway::SerenityGateway,
    model::event::{BotEvent, MemberBanned, MemberJoined, MemberRemoved},
    service::EventDispatcher,
    state::SessionState,
};

/// Handles the guild_member_addition event when a member joins a guild
pub async fn handle_guild_member_addition(state: &SessionState, ctx: Context, new_member: Member) {
    let user_id = new_member.user.id;
    let guild_id = new_member.guild_id;
    let event = BotEvent::MemberJoined(MemberJoined::from(&new_member));

    dispatch(state, ctx, event, "member join", guild_id, user_id).await;
}

/// Handles the guild_member_removal event when a member leaves a guild
pub async fn handle_guild_member_removal(
    state: &SessionState,
    ctx: Context,
    guild_id: GuildId,
    user: User,
    _member_data_if_available: Option<Member>,
) {
    let event = BotEvent::MemberRemoved(MemberRemoved::new(guild_id, &user, Utc::now()));

    dispatch(state, ctx, event, "member removal", guild_id, user.id).await;
}

/// Handles the guild_ban_addition event when a user is banned from a guild
pub async fn handle_guild_ban_addition(
    state: &SessionState,
    ctx: Context,
    guild_id: GuildId,
    banned_user: User,
) {
    let event = BotEvent::MemberBanned(MemberBanned::new(guild_id, &banned_user));

    dispatch(state, ctx, event, "ban", guild_id, banned_user.id).await;
}

async fn dispatch(
    state: &SessionState,
    ctx: Context,
    event: BotEvent,
    kind: &str,
    guild_id: GuildId,
    user_id: UserId,
) {
    let gateway = SerenityGateway::new(ctx);

    if let Err(e) = EventDispatcher::new(state, &gateway).dispatch(event).await {
        tracing::error!(
            "Failed to handle {} of user {} in guild {}: {}",
            kind,
            user_id,
            guild_id,
            e
        );
    }
}
