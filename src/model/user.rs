use chrono::{DateTime, Utc};
use serenity::all::{Member, Timestamp, User, UserId};

/// The parts of a Discord user the bot shows in replies and notices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: UserId,
    /// Guild nickname if known, then global display name, then username
    pub display_name: String,
    /// `name#discriminator`, or the bare username for migrated accounts
    pub tag: String,
    pub avatar_url: String,
    pub created_at: DateTime<Utc>,
    pub bot: bool,
}

impl UserProfile {
    /// Discord mention markup for this user.
    pub fn mention(&self) -> String {
        format!("<@{}>", self.id)
    }
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            display_name: user
                .member
                .as_ref()
                .and_then(|member| member.nick.clone())
                .or_else(|| user.global_name.clone())
                .unwrap_or_else(|| user.name.clone()),
            tag: user.tag(),
            avatar_url: user.face(),
            created_at: timestamp_to_utc(user.id.created_at()),
            bot: user.bot,
        }
    }
}

impl From<&Member> for UserProfile {
    fn from(member: &Member) -> Self {
        let mut profile = Self::from(&member.user);
        if let Some(nick) = &member.nick {
            profile.display_name = nick.clone();
        }
        profile
    }
}

/// Converts a Serenity timestamp into a chrono UTC datetime.
///
/// Discord timestamps carry millisecond precision which is dropped; out of range
/// values fall back to the Unix epoch.
pub fn timestamp_to_utc(timestamp: Timestamp) -> DateTime<Utc> {
    DateTime::from_timestamp(timestamp.unix_timestamp(), 0).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::{create_test_member, create_test_user};

    /// Tests converting a user with a global display name.
    ///
    /// Verifies that the global name wins over the username and that the account
    /// creation time is derived from the snowflake.
    ///
    /// Expected: display name "Alice", tag "alice", creation time from the id
    #[test]
    fn converts_user_with_global_name() {
        let user = create_test_user(175928847299117063, "alice", Some("Alice"), false);
        let profile = UserProfile::from(&user);

        assert_eq!(profile.id, UserId::new(175928847299117063));
        assert_eq!(profile.display_name, "Alice");
        assert_eq!(profile.tag, "alice");
        assert!(!profile.bot);
        // Snowflake 175928847299117063 was created 2016-04-30 11:18:25.796 UTC
        assert_eq!(
            profile.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            "2016-04-30 11:18:25"
        );
    }

    /// Tests that a user without a global name falls back to the username.
    ///
    /// Expected: display name equals the username
    #[test]
    fn falls_back_to_username() {
        let user = create_test_user(200000000000000001, "bob", None, true);
        let profile = UserProfile::from(&user);

        assert_eq!(profile.display_name, "bob");
        assert!(profile.bot);
        assert_eq!(profile.mention(), "<@200000000000000001>");
    }

    /// Tests that a member nickname takes precedence.
    ///
    /// Expected: display name equals the nickname
    #[test]
    fn member_nickname_wins() {
        let member = create_test_member(
            900000000000000000,
            create_test_user(200000000000000002, "carol", Some("Carol"), false),
            Some("Caz"),
            Some("2024-01-02T03:04:05.000000+00:00"),
        );
        let profile = UserProfile::from(&member);

        assert_eq!(profile.display_name, "Caz");
        assert_eq!(profile.tag, "carol");
    }
}
