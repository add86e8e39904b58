//! Time-bounded record of recently answered messages.

use std::collections::HashMap;

use chrono::{DateTime, TimeDelta, Utc};
use tracing::debug;

use super::normalize::NormalizedMessage;

/// Identifies "the same message from the same author in the same channel".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DedupKey {
    pub channel_id: String,
    pub author_id: String,
    pub text: NormalizedMessage,
}

impl DedupKey {
    pub fn new(channel_id: impl Into<String>, author_id: impl Into<String>, text: NormalizedMessage) -> Self {
        Self {
            channel_id: channel_id.into(),
            author_id: author_id.into(),
            text,
        }
    }
}

/// Remembers when each key was last answered.
///
/// Entries older than twice the window are dropped by [`DedupCache::purge`], which the
/// responder runs on every inbound message, so the cache only ever holds recent traffic.
#[derive(Debug)]
pub struct DedupCache {
    window: TimeDelta,
    entries: HashMap<DedupKey, DateTime<Utc>>,
}

impl DedupCache {
    pub fn new(window: TimeDelta) -> Self {
        Self { window, entries: HashMap::new() }
    }

    /// Whether `key` was answered no more than one window before `now`.
    pub fn should_suppress(&self, key: &DedupKey, now: DateTime<Utc>) -> bool {
        self.entries.get(key).is_some_and(|answered_at| now - *answered_at <= self.window)
    }

    /// Insert or refresh the entry for `key`.
    pub fn record(&mut self, key: DedupKey, now: DateTime<Utc>) {
        self.entries.insert(key, now);
    }

    /// Drop every entry answered more than two windows before `now`.
    pub fn purge(&mut self, now: DateTime<Utc>) {
        let threshold = self.window * 2;
        let before_count = self.entries.len();

        self.entries.retain(|_, answered_at| now - *answered_at <= threshold);

        let removed = before_count - self.entries.len();
        if removed > 0 {
            debug!("Purged {} expired dedup entries", removed);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
