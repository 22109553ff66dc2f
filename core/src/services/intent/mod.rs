//! Intent classification for inbound channel messages

mod classifier;

pub use classifier::{IntentClassifier, IntentKeywords};
