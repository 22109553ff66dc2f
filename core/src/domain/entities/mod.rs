//! Domain entities representing core business objects.

pub mod otp_entry;
pub mod request_type;

// Re-export commonly used types
pub use otp_entry::{OtpCode, OtpEntry, DEFAULT_TTL_MINUTES, OTP_CODE_LENGTH};
pub use request_type::RequestType;
