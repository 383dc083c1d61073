//! Line classification for hosts and Adblock-Plus/AdGuard source lists.
//!
//! Each source line is cleaned with [`strip_inline_comment`] and then offered
//! to both extractors. A hosts mapping (`0.0.0.0 ads.example.com`) yields a
//! block entry; an ABP rule (`||ads.example.com^`, `@@||good.example.com^`)
//! yields a block or allow entry. Lines neither extractor understands yield
//! nothing.

mod abp;
mod hosts;

pub use abp::extract_abp;
pub use hosts::extract_hosts;

use crate::{CanonicalDomain, Disposition};

/// A domain pulled out of a source line, with the list it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Extraction {
    pub domain: CanonicalDomain,
    pub disposition: Disposition,
}

impl Extraction {
    /// Create a block entry.
    pub fn block(domain: CanonicalDomain) -> Self {
        Self {
            domain,
            disposition: Disposition::Block,
        }
    }

    /// Create an allow entry.
    pub fn allow(domain: CanonicalDomain) -> Self {
        Self {
            domain,
            disposition: Disposition::Allow,
        }
    }
}

/// Remove a trailing `# comment` and surrounding whitespace.
pub fn strip_inline_comment(line: &str) -> &str {
    let line = match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    };
    line.trim()
}

/// Extract every domain a single raw source line encodes.
///
/// The hosts extractor runs first, then the ABP extractor, on the same
/// comment-stripped line.
pub fn extract_line(line: &str) -> Vec<Extraction> {
    let line = strip_inline_comment(line);
    if line.is_empty() {
        return Vec::new();
    }

    let mut found = Vec::new();
    found.extend(extract_hosts(line));
    found.extend(extract_abp(line));
    found
}

/// Extract domains from every line of a source document.
pub fn extract_text(text: &str) -> impl Iterator<Item = Extraction> + '_ {
    text.lines().flat_map(extract_line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize;

    fn block(d: &str) -> Extraction {
        Extraction::block(normalize(d).unwrap())
    }

    fn allow(d: &str) -> Extraction {
        Extraction::allow(normalize(d).unwrap())
    }

    #[test]
    fn test_strip_inline_comment() {
        assert_eq!(
            strip_inline_comment("0.0.0.0 ads.example.com # tracker"),
            "0.0.0.0 ads.example.com"
        );
        assert_eq!(strip_inline_comment("# whole line"), "");
        assert_eq!(strip_inline_comment("  plain.com  "), "plain.com");
    }

    #[test]
    fn test_extract_hosts_line() {
        assert_eq!(
            extract_line("0.0.0.0 ads.example.com # tracker"),
            vec![block("ads.example.com")]
        );
        assert_eq!(
            extract_line("127.0.0.1\tTracker.Example.NET"),
            vec![block("tracker.example.net")]
        );
    }

    #[test]
    fn test_extract_abp_lines() {
        assert_eq!(
            extract_line("||ads.example.com^$third-party"),
            vec![block("ads.example.com")]
        );
        assert_eq!(
            extract_line("@@||good.example.com^"),
            vec![allow("good.example.com")]
        );
        assert_eq!(extract_line("plain-domain.org"), vec![block("plain-domain.org")]);
    }

    #[test]
    fn test_extract_nothing() {
        assert!(extract_line("! this is a comment").is_empty());
        assert!(extract_line("[Adblock Plus 2.0]").is_empty());
        assert!(extract_line("").is_empty());
        assert!(extract_line("   # only a comment").is_empty());
        assert!(extract_line("127.0.0.1 localhost").is_empty());
        assert!(extract_line("/banner[0-9]+/").is_empty());
        assert!(extract_line("0.0.0.0 0.0.0.0").is_empty());
    }

    #[test]
    fn test_extract_text() {
        let text = "! Title: test list\r\n\
                    ||ads.example.com^\r\n\
                    @@||good.example.com^\n\
                    0.0.0.0 tracker.example.org\n\
                    \n\
                    ::1 ip6-localhost\n";

        let found: Vec<Extraction> = extract_text(text).collect();
        assert_eq!(
            found,
            vec![
                block("ads.example.com"),
                allow("good.example.com"),
                block("tracker.example.org"),
            ]
        );
    }
}
