//! Chat service integration for saludo-bot.
//!
//! This module provides functionality for interacting with a chat transport:
//! - Announcing the bot as online
//! - Receiving inbound messages one at a time
//! - Sending replies to a channel
//!
//! It defines the `GenericChatClient` trait that can be implemented for different
//! chat services, with a line-oriented console implementation.

pub mod console;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::base::types::{InboundMessage, Res, Void};

// Traits.

/// Generic "chat" trait that clients must implement.
#[async_trait]
pub trait GenericChatClient: Send + Sync + 'static {
    /// Get the bot user ID.
    ///
    /// Messages authored by this ID are treated as the bot's own and never answered.
    fn bot_user_id(&self) -> &str;

    /// Start the chat client.
    ///
    /// Announces the bot as online, along with its presence activity.
    async fn start(&self) -> Void;

    /// Wait for the next inbound message.
    ///
    /// Returns `None` once the transport has closed.
    async fn next_message(&self) -> Res<Option<InboundMessage>>;

    /// Send a message to a channel.
    async fn send_message(&self, channel_id: &str, text: &str) -> Void;
}

// Structs.

/// Chat client for the application.
///
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct ChatClient {
    inner: Arc<dyn GenericChatClient>,
}

impl Deref for ChatClient {
    type Target = dyn GenericChatClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl ChatClient {
    pub fn new(inner: Arc<dyn GenericChatClient>) -> Self {
        Self { inner }
    }
}
