//! Test factory for creating Serenity Member objects.

use serenity::all::{Member, User};

/// Creates a test Serenity Member with customizable fields.
///
/// Creates a Member object by deserializing JSON shaped like a `GUILD_MEMBER_ADD`
/// gateway payload. The member has no roles and is not pending.
///
/// # Arguments
/// - `guild_id` - Discord guild ID the member belongs to
/// - `user` - The member's user, typically from `create_test_user`
/// - `nick` - Optional guild nickname
/// - `joined_at` - Optional RFC 3339 join timestamp
///
/// # Returns
/// - `Member` - A valid Serenity Member struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::{member::create_test_member, user::create_test_user};
///
/// let user = create_test_user(123, "newbie", None, false);
/// let member = create_test_member(456, user, None, Some("2024-01-02T03:04:05.000000+00:00"));
/// ```
pub fn create_test_member(
    guild_id: u64,
    user: User,
    nick: Option<&str>,
    joined_at: Option<&str>,
) -> Member {
    serde_json::from_value(serde_json::json!({
        "guild_id": guild_id.to_string(),
        "user": user,
        "nick": nick,
        "avatar": null,
        "roles": [],
        "joined_at": joined_at,
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "permissions": null,
        "communication_disabled_until": null,
    }))
    .expect("Failed to create test member - invalid JSON structure")
}
