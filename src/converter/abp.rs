//! Adblock-Plus / AdGuard network rules.
//!
//! Only the domain part of a rule is kept: options after `$` and any path
//! after `/` are discarded, so path-scoped rules degrade to whole-domain
//! rules. Cosmetic and regex rules fall out because what remains is not a
//! hostname.

use super::Extraction;
use crate::domain::normalize;

/// Exception rule marker.
const EXCEPTION_MARKER: &str = "@@";

/// Domain anchor marker.
const DOMAIN_ANCHOR: &str = "||";

/// Extract a block or allow entry from an ABP rule line.
///
/// Rules without a `||` anchor are treated as plain domains, which covers
/// one-domain-per-line lists.
pub fn extract_abp(line: &str) -> Option<Extraction> {
    let raw = line.trim();
    if raw.is_empty() || raw.starts_with('!') || raw.starts_with('[') {
        return None;
    }

    let rule = strip_options_and_path(raw);

    let (rule, is_exception) = match rule.strip_prefix(EXCEPTION_MARKER) {
        Some(rest) => (rest.trim_start(), true),
        None => (rule, false),
    };

    let token = match rule.strip_prefix(DOMAIN_ANCHOR) {
        Some(rest) => match rest.find('^') {
            Some(idx) => rest[..idx].trim(),
            None => rest.trim(),
        },
        None => rule,
    };

    let domain = normalize(token)?;
    Some(if is_exception {
        Extraction::allow(domain)
    } else {
        Extraction::block(domain)
    })
}

/// Drop `$options` and `/path` suffixes.
fn strip_options_and_path(rule: &str) -> &str {
    let rule = rule.split('$').next().unwrap_or(rule);
    let rule = rule.split('/').next().unwrap_or(rule);
    rule.trim()
}
