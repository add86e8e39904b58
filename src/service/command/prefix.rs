//! Prefix command dispatcher.
//!
//! Handles the built-in commands that need nothing beyond the bot itself:
//! `info`, `dado`, `moneda`, `pregunta` and `numero`.

use std::{ops::RangeInclusive, sync::Arc};

use async_trait::async_trait;
use rand::{Rng, seq::IndexedRandom};
use tracing::{debug, instrument};

use crate::{
    base::{
        config::Config,
        replies,
        types::{InboundMessage, Void},
    },
    service::chat::ChatClient,
};

use super::{CommandDispatcher, GenericCommandDispatcher};

/// Range used by `numero` when no bounds are given.
const DEFAULT_NUMBER_RANGE: RangeInclusive<i64> = 1..=100;

// Extra methods on `CommandDispatcher` applied by the prefix implementation.

impl CommandDispatcher {
    /// Creates a new prefix command dispatcher that replies through `chat`.
    pub fn prefix(config: &Config, chat: ChatClient) -> Self {
        Self {
            inner: Arc::new(PrefixCommandDispatcher::new(config, chat)),
        }
    }
}

// Types.

/// A parsed command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Info,
    Dice,
    Coin,
    Question(String),
    Number(RangeInclusive<i64>),
    /// A known command invoked with bad arguments; carries the usage template.
    Usage(&'static str),
    Unknown(String),
}

impl Command {
    /// Parse `text` as a command; `None` if it does not start with `prefix` followed by a name.
    pub fn parse(prefix: &str, text: &str) -> Option<Self> {
        let rest = text.strip_prefix(prefix)?;

        // The name must follow the prefix directly.
        if rest.starts_with(char::is_whitespace) {
            return None;
        }

        let mut parts = rest.split_whitespace();
        let name = parts.next()?;
        let args: Vec<&str> = parts.collect();

        let command = match name {
            "info" => Command::Info,
            "dado" => Command::Dice,
            "moneda" => Command::Coin,
            "pregunta" if args.is_empty() => Command::Usage(replies::QUESTION_USAGE),
            "pregunta" => Command::Question(args.join(" ")),
            "numero" => match args.as_slice() {
                [] => Command::Number(DEFAULT_NUMBER_RANGE),
                [min, max] => match (min.parse::<i64>(), max.parse::<i64>()) {
                    (Ok(min), Ok(max)) if min <= max => Command::Number(min..=max),
                    _ => Command::Usage(replies::NUMBER_USAGE),
                },
                _ => Command::Usage(replies::NUMBER_USAGE),
            },
            other => Command::Unknown(other.to_string()),
        };

        Some(command)
    }

    /// Produce the reply for this command, if it has one.
    pub fn reply<R: Rng + ?Sized>(&self, prefix: &str, owner_name: &str, rng: &mut R) -> Option<String> {
        let reply = match self {
            Command::Info => replies::fill(replies::INFO_REPLY, "owner_name", owner_name),
            Command::Dice => format!("🎲 Sacaste un {}", rng.random_range(1..=6)),
            Command::Coin => {
                let side = if rng.random_bool(0.5) { "Cara" } else { "Cruz" };
                format!("🪙 {side}")
            }
            Command::Question(_) => {
                let answer = replies::QUESTION_ANSWERS.choose(rng).copied().unwrap_or("Tal vez.");
                format!("🎱 {answer}")
            }
            Command::Number(range) => format!("🔢 {}", rng.random_range(range.clone())),
            Command::Usage(template) => replies::fill(template, "prefix", prefix),
            Command::Unknown(_) => return None,
        };

        Some(reply)
    }
}

// Structs.

/// Prefix command dispatcher implementation.
struct PrefixCommandDispatcher {
    prefix: String,
    owner_name: String,
    chat: ChatClient,
}

impl PrefixCommandDispatcher {
    fn new(config: &Config, chat: ChatClient) -> Self {
        Self {
            prefix: config.command_prefix.clone(),
            owner_name: config.owner_name.clone(),
            chat,
        }
    }
}

#[async_trait]
impl GenericCommandDispatcher for PrefixCommandDispatcher {
    #[instrument(skip_all)]
    async fn dispatch(&self, message: &InboundMessage) -> Void {
        let Some(command) = Command::parse(&self.prefix, &message.text) else {
            return Ok(());
        };

        let reply = command.reply(&self.prefix, &self.owner_name, &mut rand::rng());

        let Some(reply) = reply else {
            debug!("Ignoring unknown command: {:?}", command);
            return Ok(());
        };

        self.chat.send_message(&message.channel_id, &reply).await
    }
}

// Tests.
