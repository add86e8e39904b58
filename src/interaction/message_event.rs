//! Handling of inbound chat messages.

use chrono::{DateTime, Utc};
use tokio::task::JoinSet;
use tracing::{Instrument, debug, error, instrument};

use crate::{
    base::types::{InboundMessage, Void},
    responder::{Outcome, Reply, Responder},
    service::{chat::ChatClient, command::CommandDispatcher},
};

/// Handles an inbound message event.
///
/// The responder runs synchronously so that cache updates follow arrival order. Sending the
/// reply and dispatching commands happen on a task spawned into `in_flight`, which the caller
/// must drain before shutting down.
#[instrument(skip_all)]
pub fn handle_message_event(message: InboundMessage, now: DateTime<Utc>, responder: &mut Responder, chat: ChatClient, commands: CommandDispatcher, in_flight: &mut JoinSet<()>) {
    let message = if message.author_id == chat.bot_user_id() { message.self_authored() } else { message };

    let Outcome::Dispatch { reply } = responder.respond(&message, now) else {
        debug!("Ignoring self-authored message.");
        return;
    };

    in_flight.spawn(
        async move {
            // Process the event.
            let result = handle_message_event_internal(message, reply, &chat, &commands).await;

            // Log any errors.
            if let Err(err) = &result {
                error!("Error while handling: {}", err);
            }
        }
        .in_current_span(),
    );
}

/// Sends `reply` (if any) and then hands `message` to command dispatch.
///
/// A failed reply is logged and does not prevent dispatch.
#[instrument(skip_all)]
pub async fn handle_message_event_internal(message: InboundMessage, reply: Option<Reply>, chat: &ChatClient, commands: &CommandDispatcher) -> Void {
    if let Some(reply) = reply {
        if let Err(err) = chat.send_message(&message.channel_id, &reply.text()).await {
            error!("Failed to send {} reply: {}", reply.category, err);
        }
    }

    commands.dispatch(&message).await
}
