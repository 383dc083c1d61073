//! Block and allow set accumulation across sources.

use ahash::AHashSet;

use crate::converter::Extraction;
use crate::{CanonicalDomain, Disposition};

/// Unique domains per disposition, collected from every source.
///
/// Conflicts are left in place while sources are being added and resolved
/// once by [`DomainSets::resolve`], so the result does not depend on the
/// order in which sources were fetched.
#[derive(Debug, Default)]
pub struct DomainSets {
    block: AHashSet<CanonicalDomain>,
    allow: AHashSet<CanonicalDomain>,
}

/// Final sorted output lists. Never share a domain.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedLists {
    pub block: Vec<CanonicalDomain>,
    pub allow: Vec<CanonicalDomain>,
}

impl DomainSets {
    /// Create empty sets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one extracted domain to the set for its disposition.
    pub fn insert(&mut self, extraction: Extraction) {
        match extraction.disposition {
            Disposition::Block => self.block.insert(extraction.domain),
            Disposition::Allow => self.allow.insert(extraction.domain),
        };
    }

    /// Number of unique block domains collected so far (before resolution).
    pub fn block_len(&self) -> usize {
        self.block.len()
    }

    /// Number of unique allow domains collected so far.
    pub fn allow_len(&self) -> usize {
        self.allow.len()
    }

    /// Remove allowed domains from the block set and sort both lists.
    pub fn resolve(self) -> ResolvedLists {
        let DomainSets { block, allow } = self;

        let before = block.len();
        let mut block: Vec<CanonicalDomain> =
            block.into_iter().filter(|d| !allow.contains(d)).collect();
        log::debug!(
            "Allow list overrode {} blocked domains",
            before - block.len()
        );

        let mut allow: Vec<CanonicalDomain> = allow.into_iter().collect();

        block.sort_unstable();
        allow.sort_unstable();

        ResolvedLists { block, allow }
    }
}

impl Extend<Extraction> for DomainSets {
    fn extend<I: IntoIterator<Item = Extraction>>(&mut self, iter: I) {
        for extraction in iter {
            self.insert(extraction);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::extract_text;
    use crate::normalize;

    fn names(list: &[CanonicalDomain]) -> Vec<&str> {
        list.iter().map(CanonicalDomain::as_str).collect()
    }

    #[test]
    fn test_deduplicates() {
        let mut sets = DomainSets::new();
        sets.extend(extract_text("||a.com^\n0.0.0.0 a.com\nA.COM\n||b.com^"));

        assert_eq!(sets.block_len(), 2);
        assert_eq!(sets.allow_len(), 0);
    }

    #[test]
    fn test_allow_wins_regardless_of_order() {
        let mut allow_first = DomainSets::new();
        allow_first.extend(extract_text("@@||x.com^"));
        allow_first.extend(extract_text("||x.com^\n||y.com^"));

        let mut block_first = DomainSets::new();
        block_first.extend(extract_text("||x.com^\n||y.com^"));
        block_first.extend(extract_text("@@||x.com^"));

        let a = allow_first.resolve();
        let b = block_first.resolve();
        assert_eq!(a, b);
        assert_eq!(names(&a.block), vec!["y.com"]);
        assert_eq!(names(&a.allow), vec!["x.com"]);
    }

    #[test]
    fn test_sorted_output() {
        let mut sets = DomainSets::new();
        for d in ["zeta.com", "alpha.com", "mid.org", "alpha-beta.com"] {
            sets.insert(Extraction::block(normalize(d).unwrap()));
        }

        let resolved = sets.resolve();
        assert_eq!(
            names(&resolved.block),
            vec!["alpha-beta.com", "alpha.com", "mid.org", "zeta.com"]
        );
        assert!(resolved.allow.is_empty());
    }
}
