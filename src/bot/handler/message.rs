use serenity::all::{Context, Message};

use crate::{
    bot::gateway::SerenityGateway,
    model::event::{BotEvent, InboundMessage},
    service::EventDispatcher,
    state::SessionState,
};

/// Handle message creation in a channel
pub async fn handle_message(state: &SessionState, ctx: Context, message: Message) {
    let gateway = SerenityGateway::new(ctx);
    let event = BotEvent::MessageCreated(InboundMessage::from(&message));

    if let Err(e) = EventDispatcher::new(state, &gateway).dispatch(event).await {
        tracing::error!(
            "Failed to handle message {} in channel {}: {}",
            message.id,
            message.channel_id,
            e
        );
    }
}
