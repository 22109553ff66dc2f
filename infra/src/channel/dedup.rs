//! Inbound message deduplication
//!
//! Messaging gateways may push the same message more than once. A message is
//! identified by sender, its trimmed lowercase text and the minute it arrived
//! in; a repeat inside the same minute is reported as a duplicate. Memory is
//! bounded: once more than `capacity` keys are held, only the `retain` most
//! recent survive.

use chrono::{DateTime, Utc};
use std::collections::{HashSet, VecDeque};
use std::sync::Mutex;
use tracing::debug;

use crate::config::DedupConfig;

#[derive(Default)]
struct Seen {
    order: VecDeque<String>,
    keys: HashSet<String>,
}

/// Bounded memory of recently handled inbound messages
pub struct InboundDeduplicator {
    seen: Mutex<Seen>,
    capacity: usize,
    retain: usize,
}

impl InboundDeduplicator {
    pub fn new(config: DedupConfig) -> Self {
        let capacity = config.capacity.max(1);
        Self {
            seen: Mutex::new(Seen::default()),
            capacity,
            retain: config.retain.min(capacity),
        }
    }

    fn key(sender: &str, text: &str, now: DateTime<Utc>) -> String {
        format!(
            "{}_{}_{}",
            sender,
            text.trim().to_lowercase(),
            now.timestamp().div_euclid(60)
        )
    }

    /// Record the message and report whether it is new.
    ///
    /// Returns `false` if the same sender sent the same text earlier in the
    /// current minute.
    pub fn check_and_record(&self, sender: &str, text: &str) -> bool {
        self.check_and_record_at(sender, text, Utc::now())
    }

    pub fn check_and_record_at(&self, sender: &str, text: &str, now: DateTime<Utc>) -> bool {
        let key = Self::key(sender, text, now);
        let mut seen = self.seen.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        if seen.keys.contains(&key) {
            debug!("Duplicate inbound message dropped");
            return false;
        }

        seen.keys.insert(key.clone());
        seen.order.push_back(key);

        if seen.order.len() > self.capacity {
            let excess = seen.order.len() - self.retain;
            for _ in 0..excess {
                if let Some(old) = seen.order.pop_front() {
                    seen.keys.remove(&old);
                }
            }
            debug!(kept = seen.order.len(), "Trimmed inbound dedup memory");
        }

        true
    }

    /// Number of remembered messages
    pub fn len(&self) -> usize {
        self.seen
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .order
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InboundDeduplicator {
    fn default() -> Self {
        Self::new(DedupConfig::default())
    }
}
