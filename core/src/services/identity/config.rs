//! Region table for the phone identity normalizer

use serde::{Deserialize, Serialize};

/// Numbering rule for one region.
///
/// A rule recognizes three spellings of a mobile number:
/// - national: `national_length` digits starting with `mobile_prefix`
/// - trunk: `trunk_prefix` followed by a national number
/// - qualified: `country_code` followed by `national_length` digits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionRule {
    /// Human-readable region name, used in logs only
    pub name: String,
    /// Country calling code without `+`
    pub country_code: String,
    /// Number of digits of a national (subscriber) number
    pub national_length: usize,
    /// Leading digit(s) of a national mobile number
    pub mobile_prefix: String,
    /// Domestic trunk prefix, if the region uses one
    #[serde(default)]
    pub trunk_prefix: Option<String>,
}

impl RegionRule {
    pub fn new(
        name: impl Into<String>,
        country_code: impl Into<String>,
        national_length: usize,
        mobile_prefix: impl Into<String>,
        trunk_prefix: Option<&str>,
    ) -> Self {
        Self {
            name: name.into(),
            country_code: country_code.into(),
            national_length,
            mobile_prefix: mobile_prefix.into(),
            trunk_prefix: trunk_prefix.map(str::to_string),
        }
    }

    /// Turkey: +90, 10-digit mobiles starting with 5, trunk prefix 0
    pub fn turkey() -> Self {
        Self::new("TR", "90", 10, "5", Some("0"))
    }

    /// Albania: +355, 9-digit mobiles starting with 6
    pub fn albania() -> Self {
        Self::new("AL", "355", 9, "6", None)
    }
}

/// Configuration for the phone identity normalizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Region rules, applied in order
    #[serde(default = "default_regions")]
    pub regions: Vec<RegionRule>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            regions: default_regions(),
        }
    }
}

fn default_regions() -> Vec<RegionRule> {
    vec![RegionRule::turkey(), RegionRule::albania()]
}
