//! Phone identity normalizer
//!
//! Subscribers reach the relay under several spellings of the same number:
//! with or without `+`, with or without the country code, with or without the
//! domestic trunk zero. Deposits store one canonical spelling; lookups expand
//! the caller's spelling into every candidate and probe them all.

use relay_shared::phone::digits_only;

use super::config::{NormalizerConfig, RegionRule};

impl RegionRule {
    /// Expand `digits` to `+<country code><national number>` if it has one of
    /// this region's shapes.
    fn expand(&self, digits: &str) -> Option<String> {
        let national = self.national_length;

        // qualified: already carries the country code
        if digits.len() == self.country_code.len() + national
            && digits.starts_with(&self.country_code)
        {
            return Some(format!("+{}", digits));
        }

        if digits.len() == national && digits.starts_with(&self.mobile_prefix) {
            return Some(format!("+{}{}", self.country_code, digits));
        }

        if let Some(trunk) = &self.trunk_prefix {
            if digits.len() == trunk.len() + national
                && digits.starts_with(trunk.as_str())
                && digits[trunk.len()..].starts_with(&self.mobile_prefix)
            {
                return Some(format!("+{}{}", self.country_code, &digits[trunk.len()..]));
            }
        }

        None
    }
}

/// Candidate spellings of one phone identity, deduplicated, in probe order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneVariants(Vec<String>);

impl PhoneVariants {
    fn push(&mut self, candidate: String) {
        if !self.0.contains(&candidate) {
            self.0.push(candidate);
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.0.iter().any(|v| v == candidate)
    }
}

impl<'a> IntoIterator for &'a PhoneVariants {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Table-driven phone identity normalizer
#[derive(Debug, Clone)]
pub struct PhoneNormalizer {
    regions: Vec<RegionRule>,
}

impl Default for PhoneNormalizer {
    fn default() -> Self {
        Self::new(NormalizerConfig::default())
    }
}

impl PhoneNormalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self {
            regions: config.regions,
        }
    }

    pub fn regions(&self) -> &[RegionRule] {
        &self.regions
    }

    /// Every spelling that may denote the same subscriber as `raw`.
    ///
    /// The raw input comes first, then `+D`, then `D`, then each regional
    /// expansion in table order. Blank input, or input without digits, yields
    /// no candidates.
    pub fn variants(&self, raw: &str) -> PhoneVariants {
        let mut variants = PhoneVariants::default();
        if raw.trim().is_empty() {
            return variants;
        }

        let digits = digits_only(raw);
        if digits.is_empty() {
            return variants;
        }

        variants.push(raw.to_string());
        variants.push(format!("+{}", digits));
        variants.push(digits.clone());
        for region in &self.regions {
            if let Some(expanded) = region.expand(&digits) {
                variants.push(expanded);
            }
        }
        variants
    }

    /// Single storage spelling for `raw`.
    ///
    /// Precedence: explicit `+` input, then the first matching region rule,
    /// then `+D`. Blank input, or input without digits, is returned unchanged.
    pub fn canonical(&self, raw: &str) -> String {
        let digits = digits_only(raw);
        if raw.trim().is_empty() || digits.is_empty() {
            return raw.to_string();
        }

        if raw.trim_start().starts_with('+') {
            return format!("+{}", digits);
        }

        self.regions
            .iter()
            .find_map(|region| region.expand(&digits))
            .unwrap_or_else(|| format!("+{}", digits))
    }
}
