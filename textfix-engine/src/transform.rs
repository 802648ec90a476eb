//! Text transforms: ordered rule application and line-terminator
//! normalization.

use crate::rules::SubstitutionRule;

/// Apply every rule in order. Each rule replaces all non-overlapping
/// occurrences of its pattern in the full text before the next rule runs.
pub fn apply_rules(text: &str, rules: &[SubstitutionRule]) -> String {
    let mut out = text.to_owned();
    for rule in rules {
        out = out.replace(rule.pattern.as_str(), &rule.replacement);
    }
    out
}

/// Rewrite every line terminator (`\r\n`, bare `\r`, bare `\n`) as `\r\n`,
/// regardless of which conventions the input mixes.
pub fn normalize_line_endings(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str("\r\n");
            }
            '\n' => out.push_str("\r\n"),
            other => out.push(other),
        }
    }
    out
}

/// The full per-file transform: substitutions first, then terminator
/// normalization.
pub fn transform(text: &str, rules: &[SubstitutionRule]) -> String {
    normalize_line_endings(&apply_rules(text, rules))
}
