//! OpenClash rule provider files.
//!
//! Output layout:
//!
//! ```text
//! # OpenClash AdGuard Converted: <repo>
//! # Updated at: <YYYY-MM-DD HH:MM:SS ±ZZZZ>
//! # Sources:
//! # - <url>
//! # Total <block|allow> domains: <count>
//!
//! payload:
//!   - DOMAIN-SUFFIX,<domain>
//! ```

use std::fmt::Write as _;
use std::fs;
use std::io::Write;
use std::path::Path;

use time::format_description::FormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

use crate::{CanonicalDomain, Disposition, Result};

const TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!(
    "[year]-[month]-[day] [hour]:[minute]:[second] [offset_hour sign:mandatory][offset_minute]"
);

/// Metadata written at the top of every rule file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleFileHeader {
    /// Repository reference shown on the first line
    pub repo: String,
    /// Preformatted generation timestamp
    pub updated_at: String,
    /// Source list URLs, in the order given
    pub sources: Vec<String>,
}

/// Format a timestamp for the `Updated at` header line.
pub fn format_timestamp(at: OffsetDateTime) -> Result<String> {
    Ok(at.format(TIMESTAMP_FORMAT)?)
}

/// Current time in the local UTC offset, or UTC if it cannot be determined.
pub fn local_now() -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();
    match UtcOffset::current_local_offset() {
        Ok(offset) => now.to_offset(offset),
        Err(e) => {
            log::warn!("Local UTC offset unavailable, using UTC: {}", e);
            now
        }
    }
}

/// Render a complete rule file.
pub fn render_rule_file(
    header: &RuleFileHeader,
    disposition: Disposition,
    domains: &[CanonicalDomain],
) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "# OpenClash AdGuard Converted: {}", header.repo.trim_end());
    let _ = writeln!(out, "# Updated at: {}", header.updated_at.trim_end());
    out.push_str("# Sources:\n");
    for url in &header.sources {
        let _ = writeln!(out, "# - {}", url.trim_end());
    }
    let _ = writeln!(out, "# Total {} domains: {}", disposition, domains.len());
    out.push('\n');

    out.push_str("payload:\n");
    for domain in domains {
        let _ = writeln!(out, "  - DOMAIN-SUFFIX,{}", domain);
    }

    out
}

/// Write a rule file, replacing any existing file at `path`.
///
/// Missing parent directories are created. Content goes to a temporary file
/// in the destination directory first and is renamed into place, so readers
/// never observe a half-written file.
pub fn write_rule_file(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut temp_file = tempfile::NamedTempFile::new_in(dir)?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.as_file().sync_all()?;
    temp_file.persist(path).map_err(|e| e.error)?;

    log::info!("Wrote {:?} ({} bytes)", path, content.len());
    Ok(())
}
