//! Runtime services and shared state for the saludo-bot.

use chrono::Utc;
use tokio::task::JoinSet;
use tracing::{debug, error, info, instrument};

use crate::{
    base::{
        config::Config,
        types::{Res, Void},
    },
    interaction,
    responder::Responder,
    service::{chat::ChatClient, command::CommandDispatcher},
};

/// Runtime service context that can be shared across the application.
///
/// This struct holds the chat client, command dispatcher, and configuration.
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The chat client instance.
    pub chat: ChatClient,
    /// The command dispatcher instance.
    pub commands: CommandDispatcher,
}

impl Runtime {
    /// Create a new runtime instance.
    #[instrument(skip_all)]
    pub async fn new(config: Config) -> Res<Self> {
        // Initialize the chat client.
        let chat = ChatClient::console(&config);

        // Initialize the command dispatcher.
        let commands = CommandDispatcher::prefix(&config, chat.clone());

        Ok(Self::with_services(config, chat, commands))
    }

    /// Create a runtime around already-built services.
    pub fn with_services(config: Config, chat: ChatClient, commands: CommandDispatcher) -> Self {
        Self { config, chat, commands }
    }

    /// Process inbound messages, one at a time, until the transport closes or Ctrl-C.
    ///
    /// Replies and dispatches already started for accepted messages are awaited before returning.
    pub async fn start(&self) -> Void {
        self.chat.start().await?;

        let mut responder = Responder::new(self.config.dedup_window());
        let mut in_flight = JoinSet::new();

        info!("Listening for messages ...");

        let result = loop {
            tokio::select! {
                message = self.chat.next_message() => {
                    let message = match message {
                        Ok(Some(message)) => message,
                        Ok(None) => {
                            info!("Chat transport closed.");
                            break Ok(());
                        }
                        Err(err) => break Err(err),
                    };

                    interaction::message_event::handle_message_event(message, Utc::now(), &mut responder, self.chat.clone(), self.commands.clone(), &mut in_flight);
                }
                Some(joined) = in_flight.join_next(), if !in_flight.is_empty() => {
                    log_join(joined);
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown signal received.");
                    break Ok(());
                }
            }
        };

        debug!("Waiting on {} in-flight messages ({} cached replies).", in_flight.len(), responder.cache().len());

        while let Some(joined) = in_flight.join_next().await {
            log_join(joined);
        }

        result
    }
}

fn log_join(joined: Result<(), tokio::task::JoinError>) {
    if let Err(err) = joined {
        error!("Message task failed: {}", err);
    }
}
