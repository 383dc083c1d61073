//! Which output list an extracted domain belongs to.

use std::fmt;

/// Disposition of a domain extracted from a source list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Disposition {
    /// Domain should be blocked
    #[default]
    Block,
    /// Exception rule: domain must never be blocked
    Allow,
}

impl Disposition {
    /// Get the string representation used in rule file headers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Disposition::Block => "block",
            Disposition::Allow => "allow",
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Disposition {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "block" => Ok(Disposition::Block),
            "allow" => Ok(Disposition::Allow),
            _ => Err(()),
        }
    }
}
