//! Test factory for creating Serenity User objects.

use serenity::all::User;

/// Creates a test Serenity User with customizable fields.
///
/// Creates a User object by deserializing JSON with the provided values. The account
/// uses the migrated username system (discriminator "0"), so its tag is the bare
/// username. Avatar is left unset so the default avatar URL is used.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake); also determines the account creation time
/// - `username` - Unique username
/// - `global_name` - Optional display name
/// - `bot` - Whether the account is a bot
///
/// # Returns
/// - `User` - A valid Serenity User struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::user::create_test_user;
///
/// let user = create_test_user(175928847299117063, "alice", Some("Alice"), false);
/// assert_eq!(user.name, "alice");
/// ```
pub fn create_test_user(user_id: u64, username: &str, global_name: Option<&str>, bot: bool) -> User {
    serde_json::from_value(serde_json::json!({
        "id": user_id.to_string(),
        "username": username,
        "discriminator": "0",
        "global_name": global_name,
        "avatar": null,
        "bot": bot,
        "public_flags": 0,
    }))
    .expect("Failed to create test user - invalid JSON structure")
}
