//! Phone identity normalization
//!
//! Maps loosely formatted phone numbers to a canonical storage spelling and
//! to the set of spellings accepted for lookup. Region handling is driven by
//! the [`RegionRule`] table in [`NormalizerConfig`].

mod config;
mod normalizer;

pub use config::{NormalizerConfig, RegionRule};
pub use normalizer::{PhoneNormalizer, PhoneVariants};
