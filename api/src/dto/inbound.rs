//! Inbound push bodies

use relay_core::services::InboundOutcome;
use serde::{Deserialize, Serialize};

/// Message pushed by the messaging gateway
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InboundBody {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub sender: Option<String>,
}

/// Response to an inbound push
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum InboundResponse {
    /// The message was passed to the dispatch service
    Handled(InboundOutcome),
    /// The same message was already handled this minute
    Duplicate { outcome: &'static str },
}

impl InboundResponse {
    pub fn duplicate() -> Self {
        InboundResponse::Duplicate {
            outcome: "duplicate",
        }
    }
}
