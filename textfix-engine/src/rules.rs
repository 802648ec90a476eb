//! Literal substitution rules.

/// The UTF-8 byte-order mark as it appears after decoding.
pub const BOM: &str = "\u{feff}";

/// A literal find/replace pair. Applying a rule replaces every
/// non-overlapping occurrence of `pattern`; the result is not rescanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionRule {
    pub pattern: String,
    pub replacement: String,
}

impl SubstitutionRule {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

/// The default rule set: strip the BOM, then decode the three entities the
/// tool cares about.
///
/// Ordering contract: the BOM rule runs first, and `&amp;` runs last — an
/// earlier `&amp;` pass could otherwise eat the leading `&` of an entity a
/// later rule still has to match.
pub fn default_rules() -> Vec<SubstitutionRule> {
    vec![
        SubstitutionRule::new(BOM, ""),
        SubstitutionRule::new("&apos;", "'"),
        SubstitutionRule::new("&quot;", "\""),
        SubstitutionRule::new("&amp;", "&"),
    ]
}
