//! Dispatch configuration

use serde::{Deserialize, Serialize};

use crate::services::intent::IntentKeywords;

/// Configuration for [`DispatchService`](super::DispatchService)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// Keyword table for classifying inbound text
    #[serde(default)]
    pub keywords: IntentKeywords,
}
