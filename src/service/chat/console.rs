//! Line-oriented console chat client.
//!
//! Each line read from stdin is one message in the configured console channel. A line of
//! the form `@name: text` is attributed to `name` instead of the configured console author,
//! which makes it easy to play a conversation between several people. Replies are printed
//! to stdout.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::{
    io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin, Stdout},
    sync::Mutex,
};
use tracing::{info, instrument};

use crate::base::{
    config::Config,
    types::{InboundMessage, Res, Void},
};

use super::{ChatClient, GenericChatClient};

// Extra methods on `ChatClient` applied by the console implementation.

impl ChatClient {
    /// Creates a new console chat client.
    pub fn console(config: &Config) -> Self {
        Self {
            inner: Arc::new(ConsoleChatClient::new(config)),
        }
    }
}

// Structs.

/// Console client implementation.
struct ConsoleChatClient {
    bot_user_id: String,
    presence_activity: String,
    channel_id: String,
    author_id: String,
    author_name: String,
    input: Mutex<Lines<BufReader<Stdin>>>,
    output: Mutex<Stdout>,
}

impl ConsoleChatClient {
    fn new(config: &Config) -> Self {
        Self {
            bot_user_id: config.bot_user_id.clone(),
            presence_activity: config.presence_activity.clone(),
            channel_id: config.console_channel_id.clone(),
            author_id: config.console_author_id.clone(),
            author_name: config.console_author_name.clone(),
            input: Mutex::new(BufReader::new(tokio::io::stdin()).lines()),
            output: Mutex::new(tokio::io::stdout()),
        }
    }

    fn to_message(&self, line: &str) -> InboundMessage {
        match parse_line(line) {
            Some((name, text)) => InboundMessage::new(&self.channel_id, name, name, text),
            None => InboundMessage::new(&self.channel_id, &self.author_id, &self.author_name, line),
        }
    }
}

#[async_trait]
impl GenericChatClient for ConsoleChatClient {
    fn bot_user_id(&self) -> &str {
        &self.bot_user_id
    }

    async fn start(&self) -> Void {
        info!("Bot {} is online ✅", self.bot_user_id);
        info!("Playing {}", self.presence_activity);

        Ok(())
    }

    async fn next_message(&self) -> Res<Option<InboundMessage>> {
        let line = self.input.lock().await.next_line().await?;

        Ok(line.map(|line| self.to_message(&line)))
    }

    #[instrument(skip(self))]
    async fn send_message(&self, channel_id: &str, text: &str) -> Void {
        let rendered = format!("[{channel_id}] {}: {text}\n", self.bot_user_id);

        let mut output = self.output.lock().await;
        output.write_all(rendered.as_bytes()).await.map_err(|e| anyhow::anyhow!("Failed to send message: {}", e))?;
        output.flush().await?;

        Ok(())
    }
}

// Helpers.

/// Split an `@name: text` line into its author and text.
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix('@')?;
    let (name, text) = rest.split_once(':')?;

    if name.is_empty() || name.contains(char::is_whitespace) {
        return None;
    }

    Some((name, text.trim_start()))
}

// Tests.
