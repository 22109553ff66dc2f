//! Store key value object.

use crate::domain::entities::RequestType;

/// Key of an entry in the OTP store: a phone spelling plus the request type.
///
/// Deposits always use the canonical spelling; claims build one key per
/// variant spelling and probe them in turn.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OtpKey {
    pub phone: String,
    pub request_type: RequestType,
}

impl OtpKey {
    pub fn new(phone: impl Into<String>, request_type: RequestType) -> Self {
        Self {
            phone: phone.into(),
            request_type,
        }
    }
}
