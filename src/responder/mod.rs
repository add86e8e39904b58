//! Incidental-message responder.
//!
//! Decides whether free-form chat text deserves a canned reply (greetings, small talk,
//! compliments) and keeps the bot from repeating itself when the same author sends the
//! same text again within a short window.
//!
//! Processing per message:
//! - Self-authored messages are dropped before anything else.
//! - Empty text goes straight to command dispatch.
//! - Otherwise the text is normalized, the cache is purged, live duplicates are skipped,
//!   and a matching category produces a reply and a cache entry.
//!
//! Every message that is not self-authored continues to command dispatch exactly once.

pub mod classify;
pub mod dedup;
pub mod normalize;

use chrono::{DateTime, TimeDelta, Utc};
use tracing::debug;

use crate::base::{replies, types::InboundMessage};

pub use classify::{TriggerCategory, classify};
pub use dedup::{DedupCache, DedupKey};
pub use normalize::{NormalizedMessage, normalize};

/// A canned reply chosen by the responder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub category: TriggerCategory,
    /// Display name of the author being answered; only the greeting uses it.
    pub author_name: String,
}

impl Reply {
    /// Render the reply text.
    pub fn text(&self) -> String {
        match self.category {
            TriggerCategory::Greeting => replies::fill(replies::GREETING_REPLY, "author_name", &self.author_name),
            TriggerCategory::StatusQuestion => replies::STATUS_QUESTION_REPLY.to_string(),
            TriggerCategory::Acknowledgment => replies::ACKNOWLEDGMENT_REPLY.to_string(),
            TriggerCategory::Compliment => replies::COMPLIMENT_REPLY.to_string(),
        }
    }
}

/// What the caller should do with a message after the responder has seen it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The bot wrote this message itself; do nothing at all.
    Ignored,
    /// Send `reply` if present, then hand the message to command dispatch.
    Dispatch { reply: Option<Reply> },
}

impl Outcome {
    pub fn reply(&self) -> Option<&Reply> {
        match self {
            Outcome::Dispatch { reply } => reply.as_ref(),
            Outcome::Ignored => None,
        }
    }

    pub fn should_dispatch(&self) -> bool {
        matches!(self, Outcome::Dispatch { .. })
    }
}

/// Owns the dedup cache and runs the classification pipeline.
///
/// The responder is not shared: the runtime owns a single instance and feeds it one
/// message at a time, passing the current time explicitly.
#[derive(Debug)]
pub struct Responder {
    cache: DedupCache,
}

impl Responder {
    pub fn new(window: TimeDelta) -> Self {
        Self { cache: DedupCache::new(window) }
    }

    pub fn cache(&self) -> &DedupCache {
        &self.cache
    }

    /// Process one inbound message received at `now`.
    pub fn respond(&mut self, message: &InboundMessage, now: DateTime<Utc>) -> Outcome {
        if message.is_self_authored {
            return Outcome::Ignored;
        }

        if message.text.trim().is_empty() {
            return Outcome::Dispatch { reply: None };
        }

        let text = normalize(&message.text);

        self.cache.purge(now);

        let key = DedupKey::new(&message.channel_id, &message.author_id, text);
        if self.cache.should_suppress(&key, now) {
            debug!("Suppressing duplicate from {} in {}", message.author_id, message.channel_id);
            return Outcome::Dispatch { reply: None };
        }

        let Some(category) = classify(&key.text) else {
            return Outcome::Dispatch { reply: None };
        };

        debug!("Matched {} from {} in {}", category, message.author_id, message.channel_id);

        self.cache.record(key, now);

        Outcome::Dispatch {
            reply: Some(Reply {
                category,
                author_name: message.author_name.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(millis: i64) -> DateTime<Utc> {
        DateTime::<Utc>::UNIX_EPOCH + TimeDelta::milliseconds(millis)
    }

    fn message(text: &str) -> InboundMessage {
        InboundMessage::new("7", "42", "Ana", text)
    }

    fn replied(outcome: &Outcome) -> Option<TriggerCategory> {
        outcome.reply().map(|reply| reply.category)
    }

    #[test]
    fn test_duplicate_window_scenario() {
        let mut responder = Responder::new(TimeDelta::seconds(5));

        let first = responder.respond(&message("Hola!"), at(0));
        assert_eq!(replied(&first), Some(TriggerCategory::Greeting));
        assert_eq!(first.reply().map(Reply::text).as_deref(), Some("¡Hola Ana!"));

        let second = responder.respond(&message("Hola!"), at(2_000));
        assert_eq!(second, Outcome::Dispatch { reply: None });

        let third = responder.respond(&message("Hola!"), at(7_000));
        assert_eq!(replied(&third), Some(TriggerCategory::Greeting));
    }

    #[test]
    fn test_duplicates_match_after_normalization() {
        let mut responder = Responder::new(TimeDelta::seconds(5));

        assert!(responder.respond(&message("que tal"), at(0)).reply().is_some());
        assert!(responder.respond(&message("  QUE   tal \n"), at(1_000)).reply().is_none());
    }

    #[test]
    fn test_suppression_is_per_author_and_channel() {
        let mut responder = Responder::new(TimeDelta::seconds(5));

        assert!(responder.respond(&message("hola"), at(0)).reply().is_some());
        assert!(responder.respond(&InboundMessage::new("7", "43", "Luis", "hola"), at(1_000)).reply().is_some());
        assert!(responder.respond(&InboundMessage::new("8", "42", "Ana", "hola"), at(1_000)).reply().is_some());
    }

    #[test]
    fn test_unmatched_text_is_not_recorded() {
        let mut responder = Responder::new(TimeDelta::seconds(5));

        let outcome = responder.respond(&message("!crypto bitcoin"), at(0));

        assert_eq!(outcome, Outcome::Dispatch { reply: None });
        assert!(responder.cache().is_empty());
    }

    #[test]
    fn test_suppressed_message_does_not_refresh_entry() {
        let mut responder = Responder::new(TimeDelta::seconds(5));

        responder.respond(&message("hola"), at(0));
        responder.respond(&message("hola"), at(4_000));

        // The entry still dates from t=0, so t=6 is outside the window.
        assert!(responder.respond(&message("hola"), at(6_000)).reply().is_some());
    }

    #[test]
    fn test_purges_on_every_message() {
        let mut responder = Responder::new(TimeDelta::seconds(5));

        responder.respond(&message("hola"), at(0));
        assert_eq!(responder.cache().len(), 1);

        responder.respond(&InboundMessage::new("9", "1", "Eva", "nada que ver"), at(10_100));
        assert!(responder.cache().is_empty());
    }

    #[test]
    fn test_self_authored_is_ignored() {
        let mut responder = Responder::new(TimeDelta::seconds(5));

        let outcome = responder.respond(&message("hola").self_authored(), at(0));

        assert_eq!(outcome, Outcome::Ignored);
        assert!(!outcome.should_dispatch());
        assert!(responder.cache().is_empty());
    }

    #[test]
    fn test_empty_text_skips_to_dispatch() {
        let mut responder = Responder::new(TimeDelta::seconds(5));
        responder.respond(&message("hola"), at(0));

        let outcome = responder.respond(&message("   \n"), at(20_000));

        assert_eq!(outcome, Outcome::Dispatch { reply: None });
        // Empty messages skip the purge as well.
        assert_eq!(responder.cache().len(), 1);
    }

    #[test]
    fn test_every_other_message_dispatches() {
        let mut responder = Responder::new(TimeDelta::seconds(5));
        let texts = ["hola", "hola", "que educado", "", "!info", "ando bien", "chola"];

        for (i, text) in texts.iter().enumerate() {
            let outcome = responder.respond(&message(text), at(i as i64 * 500));
            assert!(outcome.should_dispatch(), "{text:?} did not dispatch");
        }
    }

    #[test]
    fn test_reply_texts() {
        let reply = |category| Reply { category, author_name: "Ana".to_string() }.text();

        assert_eq!(reply(TriggerCategory::Greeting), "¡Hola Ana!");
        assert_eq!(reply(TriggerCategory::StatusQuestion), "Bien, ¿y tú?");
        assert_eq!(reply(TriggerCategory::Acknowledgment), "¡Me alegra saberlo!");
        assert_eq!(reply(TriggerCategory::Compliment), "¡Siempre lo soy!");
    }
}
