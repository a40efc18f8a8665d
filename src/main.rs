//! psl - decompose a hostname or URL against the Public Suffix List

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::debug;

use psl_engine::{load_rules, ExtractorOptions, Stage, TldExtractor};

/// Print the public suffix, domain and subdomain of a hostname as JSON
#[derive(Parser, Debug)]
#[command(
    name = "psl",
    version,
    about = "Decompose a hostname or URL against the Public Suffix List"
)]
struct Cli {
    /// Hostname or URL to decompose
    #[arg(default_value = "")]
    input: String,

    /// Rules file: PSL text, or a compiled trie when it ends in .json
    #[arg(long, value_name = "PATH")]
    rules: Option<String>,

    /// Hostname treated as valid and registrable (repeatable)
    #[arg(long = "valid-host", value_name = "HOST")]
    valid_hosts: Vec<String>,

    /// Last pipeline stage to run
    #[arg(long, value_enum, default_value_t = StageArg::All)]
    stop_at: StageArg,

    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StageArg {
    Hostname,
    TldExists,
    PublicSuffix,
    Domain,
    All,
}

impl From<StageArg> for Stage {
    fn from(stage: StageArg) -> Self {
        match stage {
            StageArg::Hostname => Stage::Hostname,
            StageArg::TldExists => Stage::TldExists,
            StageArg::PublicSuffix => Stage::PublicSuffix,
            StageArg::Domain => Stage::Domain,
            StageArg::All => Stage::All,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let mut options = ExtractorOptions::new().with_valid_hosts(cli.valid_hosts);
    if let Some(path) = &cli.rules {
        let trie = load_rules(path).with_context(|| format!("Failed to load rules from {}", path))?;
        options = options.with_rules(Arc::new(trie));
    }

    let extractor = TldExtractor::new(options);
    debug!("{:?}", extractor);

    let result = extractor.parse_until(&cli.input, cli.stop_at.into());
    let output = if cli.compact {
        serde_json::to_string(&result)?
    } else {
        serde_json::to_string_pretty(&result)?
    };
    println!("{}", output);

    Ok(())
}
