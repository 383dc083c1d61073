//! Domain token normalization.
//!
//! Source lists are uncurated, so every extracted token goes through
//! [`normalize`] before it can reach an output list. A token either becomes a
//! [`CanonicalDomain`] or is dropped.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Maximum length of a hostname.
pub const MAX_DOMAIN_LEN: usize = 253;

/// Labels of 1-63 characters joined by dots; the final label is alphabetic.
static HOSTNAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[a-zA-Z0-9-]{1,63}\.)+[a-zA-Z]{2,63}$").expect("hostname pattern is valid")
});

/// A validated, lower-cased hostname.
///
/// Never an IP literal, never empty, no leading or trailing dot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalDomain(String);

impl CanonicalDomain {
    /// Get the domain as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the domain and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for CanonicalDomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Check whether a token looks like an IP literal.
///
/// Anything containing `:` counts as IPv6. This also catches tokens such as
/// `not:ipv6`, which existing rule consumers expect to be filtered out.
/// IPv4 is exactly four dot-separated integers in `0..=255`.
pub fn is_ip_literal(token: &str) -> bool {
    if token.contains(':') {
        return true;
    }

    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 4 {
        return false;
    }

    parts
        .iter()
        .all(|p| matches!(p.trim().parse::<i64>(), Ok(n) if (0..=255).contains(&n)))
}

/// Normalize a raw domain token.
///
/// Trims whitespace, lower-cases, strips leading dots (wildcard prefixes) and
/// one trailing dot, then rejects IP literals and anything that is not a
/// hostname. Returns `None` when the token is not usable.
///
/// # Examples
/// ```
/// use adblock2clash::normalize;
///
/// assert_eq!(normalize(" Example.COM. ").unwrap().as_str(), "example.com");
/// assert!(normalize("192.168.1.1").is_none());
/// assert!(normalize("-bad.com").is_none());
/// ```
pub fn normalize(raw: &str) -> Option<CanonicalDomain> {
    let lowered = raw.trim().to_lowercase();
    let stripped = lowered.trim_start_matches('.');
    let domain = stripped.strip_suffix('.').unwrap_or(stripped);

    if domain.is_empty() || is_ip_literal(domain) {
        return None;
    }

    if domain.len() > MAX_DOMAIN_LEN || domain.starts_with('-') {
        return None;
    }

    if HOSTNAME_PATTERN.is_match(domain) {
        Some(CanonicalDomain(domain.to_string()))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(s: &str) -> Option<String> {
        normalize(s).map(CanonicalDomain::into_string)
    }

    #[test]
    fn test_normalize_basic() {
        assert_eq!(norm(" Example.COM. "), Some("example.com".to_string()));
        assert_eq!(norm("sub.example.com"), Some("sub.example.com".to_string()));
        assert_eq!(norm("..wild.example.org"), Some("wild.example.org".to_string()));
        assert_eq!(norm("xn--80ak6aa92e.com"), Some("xn--80ak6aa92e.com".to_string()));
    }

    #[test]
    fn test_normalize_rejects_ip_literals() {
        assert_eq!(norm("192.168.1.1"), None);
        assert_eq!(norm("0.0.0.0"), None);
        assert_eq!(norm("::1"), None);
        assert_eq!(norm("fe80::1%lo0"), None);
        assert_eq!(norm("not:ipv6.com"), None);
    }

    #[test]
    fn test_normalize_rejects_bad_grammar() {
        assert_eq!(norm(""), None);
        assert_eq!(norm("   "), None);
        assert_eq!(norm("."), None);
        assert_eq!(norm("-bad.com"), None);
        assert_eq!(norm("a..com"), None);
        assert_eq!(norm("localhost"), None);
        assert_eq!(norm("example.c"), None);
        assert_eq!(norm("example.c0m"), None);
        assert_eq!(norm("under_score.com"), None);
        assert_eq!(norm("two words.com"), None);
        assert_eq!(norm("example.com.."), None);
        assert_eq!(norm("||example.com^"), None);
        assert_eq!(norm("*.example.com"), None);
    }

    #[test]
    fn test_normalize_length_bounds() {
        let label = "a".repeat(63);
        assert!(norm(&format!("{}.com", label)).is_some());
        assert!(norm(&format!("{}a.com", label)).is_none());

        // 4 * 62 + "com" = 251 chars
        let long = format!("{0}.{0}.{0}.{0}.com", "b".repeat(61));
        assert_eq!(long.len(), 251);
        assert!(norm(&long).is_some());

        let too_long = format!("{0}.{0}.{0}.{0}.abcde", "b".repeat(61));
        assert_eq!(too_long.len(), 253);
        assert!(norm(&too_long).is_some());
        assert!(norm(&format!("x{}", too_long)).is_none());
    }

    #[test]
    fn test_normalize_idempotent() {
        for raw in ["Ads.Example.COM.", ".tracker.net", "a-b.c-d.io", "x.y.z.museum"] {
            let once = normalize(raw).unwrap();
            let twice = normalize(once.as_str()).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_is_ip_literal() {
        assert!(is_ip_literal("127.0.0.1"));
        assert!(is_ip_literal("255.255.255.255"));
        assert!(is_ip_literal("::"));
        assert!(!is_ip_literal("256.0.0.1"));
        assert!(!is_ip_literal("1.2.3"));
        assert!(!is_ip_literal("1.2.3.4.5"));
        assert!(!is_ip_literal("a.b.c.d"));
        assert!(!is_ip_literal("example.com"));
    }
}
