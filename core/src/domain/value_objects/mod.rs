//! Value objects for the relay domain.

pub mod otp_key;

pub use otp_key::OtpKey;
