//! Test factory for creating Serenity Message objects.

use serenity::all::{Message, User};

/// Creates a test Serenity Message with customizable fields.
///
/// Creates a Message object by deserializing JSON shaped like a `MESSAGE_CREATE`
/// gateway payload. The mention list is taken as given, so duplicates can be used to
/// simulate a user being mentioned more than once.
///
/// # Arguments
/// - `message_id` - Discord message ID (snowflake)
/// - `channel_id` - Channel the message was sent in
/// - `guild_id` - Guild of the channel, `None` for direct messages
/// - `author` - Message author, typically from `create_test_user`
/// - `content` - Message text
/// - `mentions` - Mentioned users in message order
///
/// # Returns
/// - `Message` - A valid Serenity Message struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
pub fn create_test_message(
    message_id: u64,
    channel_id: u64,
    guild_id: Option<u64>,
    author: User,
    content: &str,
    mentions: Vec<User>,
) -> Message {
    serde_json::from_value(serde_json::json!({
        "id": message_id.to_string(),
        "channel_id": channel_id.to_string(),
        "guild_id": guild_id.map(|id| id.to_string()),
        "author": author,
        "content": content,
        "timestamp": "2024-01-01T00:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": mentions,
        "mention_roles": [],
        "attachments": [],
        "embeds": [],
        "reactions": [],
        "pinned": false,
        "type": 0,
        "flags": 0,
    }))
    .expect("Failed to create test message - invalid JSON structure")
}

/// Attaches the partial guild member Discord sends with each mention in a guild message.
///
/// # Arguments
/// - `user` - Mentioned user, typically from `create_test_user`
/// - `nick` - Guild nickname of the mentioned user
///
/// # Returns
/// - `User` - The same user carrying its partial member data
///
/// # Panics
/// - If the JSON cannot be deserialized into a PartialMember (indicates invalid test data)
pub fn create_test_mention(mut user: User, nick: Option<&str>) -> User {
    let member = serde_json::from_value(serde_json::json!({
        "nick": nick,
        "roles": [],
        "joined_at": "2024-01-01T00:00:00.000000+00:00",
        "deaf": false,
        "mute": false,
    }))
    .expect("Failed to create test mention member - invalid JSON structure");
    user.member = Some(Box::new(member));
    user
}
