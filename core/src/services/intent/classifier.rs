//! Keyword-based intent classifier

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::entities::RequestType;

/// Keyword table used by [`IntentClassifier`]
///
/// Keywords are matched as lower-case substrings of the inbound text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentKeywords {
    /// Keywords naming a creation request
    #[serde(default = "default_creation")]
    pub creation: Vec<String>,
    /// Keywords naming an edit request
    #[serde(default = "default_edit")]
    pub edit: Vec<String>,
    /// Generic "send me my code" triggers; these classify as creation
    #[serde(default = "default_triggers")]
    pub triggers: Vec<String>,
}

impl Default for IntentKeywords {
    fn default() -> Self {
        Self {
            creation: default_creation(),
            edit: default_edit(),
            triggers: default_triggers(),
        }
    }
}

fn default_creation() -> Vec<String> {
    vec!["oluşturma".to_string(), "olusturma".to_string()]
}

fn default_edit() -> Vec<String> {
    vec!["düzenleme".to_string(), "duzenleme".to_string()]
}

fn default_triggers() -> Vec<String> {
    vec!["kod".to_string(), "otp".to_string(), "code".to_string()]
}

/// Maps free-form inbound text to a [`RequestType`].
///
/// Creation keywords are checked before edit keywords, so text naming both
/// classifies as creation. Text with only a generic trigger also defaults to
/// creation.
#[derive(Debug, Clone, Default)]
pub struct IntentClassifier {
    keywords: IntentKeywords,
}

impl IntentClassifier {
    pub fn new(keywords: IntentKeywords) -> Self {
        let lower = |words: Vec<String>| -> Vec<String> {
            words
                .into_iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect()
        };
        Self {
            keywords: IntentKeywords {
                creation: lower(keywords.creation),
                edit: lower(keywords.edit),
                triggers: lower(keywords.triggers),
            },
        }
    }

    /// Classify `text`; `None` means the message is not an OTP request
    pub fn classify(&self, text: &str) -> Option<RequestType> {
        let text = text.trim().to_lowercase();
        if text.is_empty() {
            return None;
        }

        let contains_any = |words: &[String]| words.iter().any(|w| text.contains(w.as_str()));

        let request_type = if contains_any(&self.keywords.creation) {
            Some(RequestType::Creation)
        } else if contains_any(&self.keywords.edit) {
            Some(RequestType::Edit)
        } else if contains_any(&self.keywords.triggers) {
            Some(RequestType::Creation)
        } else {
            None
        };

        debug!(?request_type, "Classified inbound text");
        request_type
    }
}
