//! adblock2clash - Convert ad-blocking domain lists into OpenClash rule providers.
//!
//! This crate reads domain blocklists in the two common ad-blocking formats,
//! normalizes the domains they contain and writes a block list and an allow
//! list as `DOMAIN-SUFFIX` rule providers.
//!
//! # Supported input
//!
//! - **Hosts files**: `0.0.0.0 ads.example.com` (first hostname only)
//! - **Adblock-Plus / AdGuard**: `||ads.example.com^`, `@@||good.example.com^`,
//!   options (`$third-party`) and paths are discarded
//! - **Plain domain lists**: one domain per line
//!
//! Everything else (cosmetic filters, regex rules, IP entries) is skipped
//! silently.
//!
//! # Quick Start
//!
//! ```ignore
//! use adblock2clash::{Converter, ConverterConfig, HttpFetcher};
//!
//! let config = ConverterConfig::with_sources([
//!     "https://adguardteam.github.io/AdGuardSDNSFilter/Filters/filter.txt",
//! ]);
//! let converter = Converter::new(config, HttpFetcher::new()?);
//! let summary = converter.run()?;
//! println!("{}", summary);
//! ```
//!
//! # Conflict Resolution
//!
//! A domain that any source allows never appears in the block list, no matter
//! which source was fetched first.

mod disposition;
mod error;

pub mod aggregator;
pub mod config;
pub mod converter;
pub mod domain;
pub mod fetch;
pub mod output;
pub mod pipeline;

// Re-export core types
pub use disposition::Disposition;
pub use domain::{is_ip_literal, normalize, CanonicalDomain};
pub use error::{Error, Result};

// Re-export pipeline types
pub use aggregator::{DomainSets, ResolvedLists};
pub use config::ConverterConfig;
pub use converter::{extract_line, extract_text, Extraction};
pub use fetch::{HttpFetcher, SourceFetcher};
pub use pipeline::{Converter, Summary};
