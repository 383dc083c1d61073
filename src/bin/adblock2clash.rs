//! adblock2clash: CLI tool for converting ad-blocking lists into OpenClash rule providers.

use adblock2clash::{Converter, ConverterConfig, HttpFetcher};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "adblock2clash")]
#[command(version)]
#[command(about = "Convert hosts and AdGuard/ABP domain lists into OpenClash DOMAIN-SUFFIX rules", long_about = None)]
struct Cli {
    /// Source list URL (repeatable)
    #[arg(short, long = "url", value_name = "URL")]
    urls: Vec<String>,

    /// Output path for the block rule file [default: rules/adguard_block.yaml]
    #[arg(long)]
    out_block: Option<PathBuf>,

    /// Output path for the allow rule file [default: rules/adguard_allow.yaml]
    #[arg(long)]
    out_allow: Option<PathBuf>,

    /// Repository reference written into file headers
    #[arg(long)]
    repo: Option<String>,

    /// Download timeout per source, in seconds [default: 60]
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// YAML config file; command-line flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> adblock2clash::Result<()> {
    let config = build_config(cli)?;
    config.validate()?;

    let fetcher = HttpFetcher::with_timeout(Duration::from_secs(config.timeout_secs))?;
    let summary = Converter::new(config, fetcher).run()?;

    println!("{}", summary);
    Ok(())
}

fn build_config(cli: Cli) -> adblock2clash::Result<ConverterConfig> {
    let mut config = match &cli.config {
        Some(path) => ConverterConfig::load(path)?,
        None => ConverterConfig::default(),
    };

    config.sources.extend(cli.urls);
    if let Some(path) = cli.out_block {
        config.out_block = path;
    }
    if let Some(path) = cli.out_allow {
        config.out_allow = path;
    }
    if let Some(repo) = cli.repo {
        config.repo = repo;
    }
    if let Some(secs) = cli.timeout {
        config.timeout_secs = secs;
    }

    Ok(config)
}
