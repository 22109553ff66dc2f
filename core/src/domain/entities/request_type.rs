//! Request type carried by deposits and inferred from inbound text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;

/// The operation a code was issued for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestType {
    /// Account/card creation ("oluşturma")
    Creation,
    /// Account/card edit ("düzenleme")
    Edit,
}

impl RequestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestType::Creation => "creation",
            RequestType::Edit => "edit",
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "creation" | "oluşturma" | "olusturma" => Ok(RequestType::Creation),
            "edit" | "düzenleme" | "duzenleme" => Ok(RequestType::Edit),
            _ => Err(ValidationError::InvalidRequestType {
                value: s.to_string(),
            }),
        }
    }
}
