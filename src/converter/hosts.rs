//! Hosts file mapping lines: `<ip> <hostname> [aliases...]`.

use super::Extraction;
use crate::domain::{is_ip_literal, normalize};

/// Extract a block entry from a hosts mapping line.
///
/// Only the first hostname after the address is read; aliases are ignored.
pub fn extract_hosts(line: &str) -> Option<Extraction> {
    let mut fields = line.split_whitespace();
    let address = fields.next()?;
    let hostname = fields.next()?;

    if !is_ip_literal(address) {
        return None;
    }

    normalize(hostname).map(Extraction::block)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hosts_mapping() {
        let e = extract_hosts("0.0.0.0 ads.example.com").unwrap();
        assert_eq!(e.domain.as_str(), "ads.example.com");
        assert_eq!(e.disposition, crate::Disposition::Block);

        let e = extract_hosts(":: ipv6.tracker.com").unwrap();
        assert_eq!(e.domain.as_str(), "ipv6.tracker.com");
    }

    #[test]
    fn test_hosts_aliases_ignored() {
        let e = extract_hosts("127.0.0.1 first.example.com second.example.com").unwrap();
        assert_eq!(e.domain.as_str(), "first.example.com");
    }

    #[test]
    fn test_not_a_hosts_line() {
        assert!(extract_hosts("ads.example.com").is_none());
        assert!(extract_hosts("0.0.0.0").is_none());
        assert!(extract_hosts("example.com other.com").is_none());
        assert!(extract_hosts("300.0.0.1 ads.example.com").is_none());
        assert!(extract_hosts("0.0.0.0 localhost").is_none());
    }
}
