//! Reply texts sent back to subscribers

use chrono::Duration;

use crate::domain::entities::OtpCode;

/// Reply carrying a claimed code.
///
/// The validity is stated in whole minutes, rounded up.
pub fn code_found_reply(code: &OtpCode, ttl: Duration) -> String {
    format!(
        "🔐 OTP Kodunuz: {}\n\nBu kod {} dakika geçerlidir.",
        code.as_str(),
        ttl_minutes(ttl)
    )
}

fn ttl_minutes(ttl: Duration) -> i64 {
    (ttl.num_seconds().max(0) + 59) / 60
}

/// Reply when no live code exists.
///
/// The same text is used for an unknown subscriber and an expired code.
pub fn code_missing_reply() -> String {
    "❌ Geçerli bir OTP kodu bulunamadı.\n\nLütfen önce işleminizi başlatın.".to_string()
}
