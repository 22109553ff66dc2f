//! OTP entry entity held by the relay store.

use chrono::{DateTime, Duration, Utc};
use relay_shared::validation::validators::is_exact_digits;

use crate::errors::ValidationError;

/// Length of a relayed OTP code
pub const OTP_CODE_LENGTH: usize = 4;

/// Default validity window for a deposited code (5 minutes)
pub const DEFAULT_TTL_MINUTES: i64 = 5;

/// A 4-digit one-time passcode.
///
/// The code is kept as text: leading zeros are significant and the value is
/// never parsed as an integer. `Debug` prints the redacted form so codes do not
/// end up in logs by accident.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct OtpCode(String);

impl OtpCode {
    /// Parse a code, accepting exactly [`OTP_CODE_LENGTH`] ASCII digits
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if is_exact_digits(raw, OTP_CODE_LENGTH) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ValidationError::MalformedOtp {
                expected: OTP_CODE_LENGTH,
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First two digits followed by `**`
    pub fn redacted(&self) -> String {
        format!("{}**", &self.0[..2])
    }
}

impl std::fmt::Debug for OtpCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("OtpCode").field(&self.redacted()).finish()
    }
}

impl std::fmt::Display for OtpCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A deposited code and the instant it was deposited.
///
/// Entries are immutable; the store only ever inserts or deletes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpEntry {
    /// The relayed code
    pub code: OtpCode,

    /// Timestamp when the code was deposited
    pub deposited_at: DateTime<Utc>,
}

impl OtpEntry {
    pub fn new(code: OtpCode, deposited_at: DateTime<Utc>) -> Self {
        Self { code, deposited_at }
    }

    /// Age of the entry at `now`
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.deposited_at
    }

    /// An entry is expired once its age reaches the TTL
    pub fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        self.age(now) >= ttl
    }
}
