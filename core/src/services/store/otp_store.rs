//! In-memory OTP store
//!
//! A single mutex guards the whole map. Every multi-step "read age, decide,
//! delete" sequence runs under one acquisition, which gives claim-once
//! semantics, and the lock is never held across I/O.

use chrono::{DateTime, Duration, Utc};
use relay_shared::phone::mask_phone_number;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info};

use crate::domain::entities::{OtpCode, OtpEntry, RequestType};
use crate::domain::value_objects::OtpKey;
use crate::services::identity::PhoneNormalizer;

use super::config::OtpStoreConfig;

/// Redacted view of one pooled entry, safe to expose on status endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoolEntrySnapshot {
    /// Canonical phone the entry is stored under
    pub phone: String,
    /// Request type of the entry
    pub request_type: RequestType,
    /// First two digits of the code followed by `**`
    pub code: String,
    /// Age of the entry in seconds
    pub age_seconds: i64,
}

/// Concurrency-safe, time-bounded store of deposited codes
pub struct OtpStore {
    entries: Mutex<HashMap<OtpKey, OtpEntry>>,
    normalizer: PhoneNormalizer,
    ttl: Duration,
}

impl OtpStore {
    /// Create an empty store
    pub fn new(config: OtpStoreConfig, normalizer: PhoneNormalizer) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            normalizer,
            ttl: config.ttl(),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn normalizer(&self) -> &PhoneNormalizer {
        &self.normalizer
    }

    // Entries are immutable values, so a panic in another holder cannot leave
    // the map half-updated; recover the guard instead of propagating poison.
    fn lock(&self) -> MutexGuard<'_, HashMap<OtpKey, OtpEntry>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Store `code` under the canonical spelling of `phone_raw`, replacing any
    /// entry already held for the same phone and request type.
    ///
    /// Returns the canonical phone the code was stored under.
    pub fn put(&self, phone_raw: &str, request_type: RequestType, code: OtpCode) -> String {
        self.put_at(phone_raw, request_type, code, Utc::now())
    }

    pub fn put_at(
        &self,
        phone_raw: &str,
        request_type: RequestType,
        code: OtpCode,
        now: DateTime<Utc>,
    ) -> String {
        let canonical = self.normalizer.canonical(phone_raw);
        let key = OtpKey::new(canonical.clone(), request_type);

        let replaced = self.lock().insert(key, OtpEntry::new(code, now)).is_some();

        info!(
            phone = %mask_phone_number(&canonical),
            request_type = %request_type,
            replaced,
            event = "otp_stored",
            "Stored OTP in pool"
        );

        canonical
    }

    /// Atomically take the code held for any spelling of `phone_raw`.
    ///
    /// Variants are probed in order. Expired entries met along the way are
    /// deleted and probing continues; the first fresh entry is deleted and
    /// returned.
    pub fn claim(&self, phone_raw: &str, request_type: RequestType) -> Option<OtpCode> {
        self.claim_at(phone_raw, request_type, Utc::now())
    }

    pub fn claim_at(
        &self,
        phone_raw: &str,
        request_type: RequestType,
        now: DateTime<Utc>,
    ) -> Option<OtpCode> {
        let variants = self.normalizer.variants(phone_raw);
        if variants.is_empty() {
            return None;
        }

        let mut evicted = 0usize;
        let mut claimed = None;
        {
            let mut entries = self.lock();
            for phone in &variants {
                let key = OtpKey::new(phone.as_str(), request_type);
                match entries.get(&key).map(|entry| entry.is_expired(now, self.ttl)) {
                    None => continue,
                    Some(true) => {
                        entries.remove(&key);
                        evicted += 1;
                    }
                    Some(false) => {
                        claimed = entries.remove(&key).map(|entry| entry.code);
                        break;
                    }
                }
            }
        }

        if evicted > 0 {
            info!(
                phone = %mask_phone_number(phone_raw),
                request_type = %request_type,
                evicted,
                event = "otp_expired",
                "Evicted expired OTP entries during claim"
            );
        }

        match &claimed {
            Some(code) => info!(
                phone = %mask_phone_number(phone_raw),
                request_type = %request_type,
                code = %code.redacted(),
                event = "otp_claimed",
                "Claimed OTP from pool"
            ),
            None => debug!(
                phone = %mask_phone_number(phone_raw),
                request_type = %request_type,
                candidates = variants.len(),
                "No live OTP for any phone variant"
            ),
        }

        claimed
    }

    /// Delete every entry whose age has reached the TTL.
    ///
    /// Returns the number of entries removed.
    pub fn sweep(&self) -> usize {
        self.sweep_at(Utc::now())
    }

    pub fn sweep_at(&self, now: DateTime<Utc>) -> usize {
        let ttl = self.ttl;
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now, ttl));
        before - entries.len()
    }

    /// Number of entries currently held, expired or not
    pub fn size(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Redacted listing of the pool, ordered by phone then request type
    pub fn snapshot(&self) -> Vec<PoolEntrySnapshot> {
        self.snapshot_at(Utc::now())
    }

    pub fn snapshot_at(&self, now: DateTime<Utc>) -> Vec<PoolEntrySnapshot> {
        let mut listing: Vec<(OtpKey, PoolEntrySnapshot)> = self
            .lock()
            .iter()
            .map(|(key, entry)| {
                (
                    key.clone(),
                    PoolEntrySnapshot {
                        phone: key.phone.clone(),
                        request_type: key.request_type,
                        code: entry.code.redacted(),
                        age_seconds: entry.age(now).num_seconds(),
                    },
                )
            })
            .collect();
        listing.sort_by(|a, b| a.0.cmp(&b.0));
        listing.into_iter().map(|(_, snapshot)| snapshot).collect()
    }
}

impl Default for OtpStore {
    fn default() -> Self {
        Self::new(OtpStoreConfig::default(), PhoneNormalizer::default())
    }
}
