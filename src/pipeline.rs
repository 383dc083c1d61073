//! One conversion run: fetch every source, classify, aggregate, write.

use std::fmt;
use std::path::PathBuf;

use time::OffsetDateTime;

use crate::aggregator::{DomainSets, ResolvedLists};
use crate::config::ConverterConfig;
use crate::converter::extract_text;
use crate::fetch::SourceFetcher;
use crate::output::{format_timestamp, render_rule_file, write_rule_file, RuleFileHeader};
use crate::{Disposition, Result};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub block_path: PathBuf,
    pub block_count: usize,
    pub allow_path: PathBuf,
    pub allow_count: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Wrote:")?;
        writeln!(
            f,
            "- {} ({} domains)",
            self.block_path.display(),
            self.block_count
        )?;
        write!(
            f,
            "- {} ({} domains)",
            self.allow_path.display(),
            self.allow_count
        )
    }
}

/// Drives a conversion with a given fetcher.
pub struct Converter<F: SourceFetcher> {
    config: ConverterConfig,
    fetcher: F,
}

impl<F: SourceFetcher> Converter<F> {
    /// Create a converter.
    pub fn new(config: ConverterConfig, fetcher: F) -> Self {
        Self { config, fetcher }
    }

    /// Get the configuration.
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Fetch and classify every source, then resolve conflicts.
    ///
    /// Sources are processed sequentially. The first fetch failure aborts.
    pub fn collect(&self) -> Result<ResolvedLists> {
        let mut sets = DomainSets::new();

        for url in &self.config.sources {
            log::info!("Fetching {}", url);
            let text = self.fetcher.fetch_text(url)?;

            let (block_before, allow_before) = (sets.block_len(), sets.allow_len());
            sets.extend(extract_text(&text));

            log::info!(
                "{}: {} lines, {} new block, {} new allow",
                url,
                text.lines().count(),
                sets.block_len() - block_before,
                sets.allow_len() - allow_before
            );
        }

        Ok(sets.resolve())
    }

    /// Run the conversion, stamping headers with `now`.
    ///
    /// Nothing is written unless every source was fetched.
    pub fn run_at(&self, now: OffsetDateTime) -> Result<Summary> {
        self.config.validate()?;

        let lists = self.collect()?;

        let header = RuleFileHeader {
            repo: self.config.repo.clone(),
            updated_at: format_timestamp(now)?,
            sources: self.config.sources.clone(),
        };

        let block = render_rule_file(&header, Disposition::Block, &lists.block);
        let allow = render_rule_file(&header, Disposition::Allow, &lists.allow);

        write_rule_file(&self.config.out_block, &block)?;
        write_rule_file(&self.config.out_allow, &allow)?;

        Ok(Summary {
            block_path: self.config.out_block.clone(),
            block_count: lists.block.len(),
            allow_path: self.config.out_allow.clone(),
            allow_count: lists.allow.len(),
        })
    }

    /// Run the conversion with the current local time.
    pub fn run(&self) -> Result<Summary> {
        self.run_at(crate::output::local_now())
    }
}
