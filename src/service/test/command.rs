use super::*;
use crate::{
    model::toggle::Toggle,
    service::command::{help_reply, CommandService, UNAUTHORIZED_REPLY},
};

/// Tests marking yourself AFK.
///
/// Expected: caller added to the away set, "now AFK" reply in the same channel
#[tokio::test]
async fn afk_on_marks_caller_away() {
    let state = SessionState::new();
    let gateway = RecordingGateway::new();
    let alice = profile(100000000000000001, "Alice");

    send(&state, &gateway, message(&alice, 10, "^afk on")).await;

    assert!(state.is_away(alice.id).await);
    assert_eq!(
        gateway.texts(),
        vec![(
            ChannelId::new(10),
            "<@100000000000000001> is now AFK.".to_string()
        )]
    );
}

/// Tests running `afk on` twice.
///
/// Verifies that the second call reports the caller is already away and leaves them
/// in the away set.
///
/// Expected: "already AFK" reply, caller still away
#[tokio::test]
async fn afk_on_twice_reports_already_away() {
    let state = SessionState::new();
    let gateway = RecordingGateway::new();
    let alice = profile(100000000000000001, "Alice");
    state.set_away(alice.id).await;

    let reply = CommandService::new(&state, &gateway)
        .toggle_away(&alice, Toggle::On)
        .await;

    assert_eq!(reply, "<@100000000000000001>, you are already AFK.");
    assert!(state.is_away(alice.id).await);
}

/// Tests the `afk on` / `afk off` round trip through commands.
///
/// `afk off` is itself a message from the away user, so the dispatcher clears the status
/// before the command runs and the command reports "not AFK".
///
/// Expected: caller not away afterwards
#[tokio::test]
async fn afk_off_after_on_leaves_caller_present() {
    let state = SessionState::new();
    let gateway = RecordingGateway::new();
    let alice = profile(100000000000000001, "Alice");

    send(&state, &gateway, message(&alice, 10, "^afk on")).await;
    send(&state, &gateway, message(&alice, 10, "^afk OFF")).await;

    assert!(!state.is_away(alice.id).await);
    assert_eq!(
        gateway.texts()[1].1,
        "<@100000000000000001>, you are not AFK."
    );
}

/// Tests `afk off` when the caller is away.
///
/// Expected: "no longer AFK" reply and caller removed
#[tokio::test]
async fn afk_off_clears_away_caller() {
    let state = SessionState::new();
    let gateway = RecordingGateway::new();
    let alice = profile(100000000000000001, "Alice");
    state.set_away(alice.id).await;

    let reply = CommandService::new(&state, &gateway)
        .toggle_away(&alice, Toggle::Off)
        .await;

    assert_eq!(reply, "<@100000000000000001>, you are no longer AFK.");
    assert!(!state.is_away(alice.id).await);
}

/// Tests an invalid afk argument.
///
/// Expected: invalid usage reply, away set unchanged
#[tokio::test]
async fn afk_with_invalid_argument_is_rejected() {
    let state = SessionState::new();
    let gateway = RecordingGateway::new();
    let alice = profile(100000000000000001, "Alice");

    send(&state, &gateway, message(&alice, 10, "^afk bogus")).await;
    send(&state, &gateway, message(&alice, 10, "^afk")).await;

    assert!(!state.is_away(alice.id).await);
    let replies: Vec<String> = gateway.texts().into_iter().map(|(_, text)| text).collect();
    assert_eq!(
        replies,
        vec![
            "Invalid usage. Use '^afk on' or '^afk off'.".to_string(),
            "Invalid usage. Use '^afk on' or '^afk off'.".to_string(),
        ]
    );
}

/// Tests the administrator enabling welcome messages.
///
/// Expected: welcome on with the invoking channel as target
#[tokio::test]
async fn admin_enables_welcome_in_current_channel() {
    let state = SessionState::new();
    let gateway = RecordingGateway::new();

    send(&state, &gateway, message(&admin(), 20, "^welcome on")).await;

    let welcome = state.welcome().await;
    assert!(welcome.is_enabled());
    assert_eq!(welcome.channel_id(), Some(ChannelId::new(20)));
    assert_eq!(gateway.texts()[0].1, "Welcome messages enabled in <#20>.");
}

/// Tests a non-administrator trying to disable welcome messages.
///
/// Expected: "not authorized" reply, toggle and target unchanged
#[tokio::test]
async fn non_admin_cannot_disable_welcome() {
    let state = SessionState::new();
    let gateway = RecordingGateway::new();
    let alice = profile(100000000000000001, "Alice");

    send(&state, &gateway, message(&admin(), 20, "^welcome on")).await;
    send(&state, &gateway, message(&alice, 21, "^welcome off")).await;

    assert_eq!(state.welcome().await.channel_id(), Some(ChannelId::new(20)));
    assert_eq!(
        gateway.texts()[1],
        (ChannelId::new(21), UNAUTHORIZED_REPLY.to_string())
    );
}

/// Tests that authorization is checked before the argument.
///
/// Expected: "not authorized" instead of "invalid option" for a non-admin
#[tokio::test]
async fn authorization_precedes_argument_validation() {
    let state = SessionState::new();
    let gateway = RecordingGateway::new();
    let alice = profile(100000000000000001, "Alice");

    send(&state, &gateway, message(&alice, 21, "^datato bogus")).await;

    assert_eq!(gateway.texts()[0].1, UNAUTHORIZED_REPLY);
    assert!(!state.logging().await.is_enabled());
}

/// Tests invalid options from the administrator.
///
/// Expected: invalid option reply naming the command, no state change
#[tokio::test]
async fn admin_invalid_option_is_rejected() {
    let state = SessionState::new();
    let gateway = RecordingGateway::new();

    send(&state, &gateway, message(&admin(), 20, "^datato maybe")).await;
    send(&state, &gateway, message(&admin(), 20, "^welcome")).await;

    assert!(!state.logging().await.is_enabled());
    assert!(!state.welcome().await.is_enabled());
    let replies: Vec<String> = gateway.texts().into_iter().map(|(_, text)| text).collect();
    assert_eq!(
        replies,
        vec![
            "Invalid option. Use '^datato on' or '^datato off'.".to_string(),
            "Invalid option. Use '^welcome on' or '^welcome off'.".to_string(),
        ]
    );
}

/// Tests that repeated `datato on` moves the log to the latest channel.
///
/// Expected: last writer wins, `off` clears the target
#[tokio::test]
async fn datato_last_channel_wins_and_off_clears() {
    let state = SessionState::new();
    let gateway = RecordingGateway::new();

    send(&state, &gateway, message(&admin(), 30, "^datato on")).await;
    send(&state, &gateway, message(&admin(), 31, "^datato on")).await;
    assert_eq!(state.logging().await.channel_id(), Some(ChannelId::new(31)));

    send(&state, &gateway, message(&admin(), 31, "^datato off")).await;
    assert_eq!(state.logging().await.channel_id(), None);

    let replies: Vec<String> = gateway.texts().into_iter().map(|(_, text)| text).collect();
    assert_eq!(
        replies,
        vec![
            "Data logging enabled in <#30>.".to_string(),
            "Data logging enabled in <#31>.".to_string(),
            "Data logging disabled.".to_string(),
        ]
    );
}

/// Tests the help command.
///
/// Expected: one reply listing every command
#[tokio::test]
async fn help_lists_commands() {
    let state = SessionState::new();
    let gateway = RecordingGateway::new();
    let alice = profile(100000000000000001, "Alice");

    send(&state, &gateway, message(&alice, 10, "^help")).await;

    let texts = gateway.texts();
    assert_eq!(texts.len(), 1);
    assert_eq!(texts[0].1, help_reply());
    for name in ["^afk", "^welcome", "^datato", "^help"] {
        assert!(texts[0].1.contains(name));
    }
}

/// Tests that unknown commands and plain chat get no reply.
///
/// Expected: nothing sent
#[tokio::test]
async fn unknown_commands_are_ignored() {
    let state = SessionState::new();
    let gateway = RecordingGateway::new();
    let alice = profile(100000000000000001, "Alice");

    send(&state, &gateway, message(&alice, 10, "^dance")).await;
    send(&state, &gateway, message(&alice, 10, "just chatting")).await;

    assert!(gateway.texts().is_empty());
}
