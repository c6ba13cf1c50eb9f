//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;
use minted::ChainType;

/// Minted - generate wallets for Ethereum, BSC, Solana, Bitcoin, Tron and Cosmos.
#[derive(Debug, Parser)]
#[command(name = "minted")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Chain to generate (eth, bsc, sol, btc, tron, cosmos); skips the prompts.
    #[arg(short, long, requires = "count", value_parser = parse_chain)]
    pub chain: Option<ChainType>,

    /// Number of wallets to generate; skips the prompts.
    #[arg(short = 'n', long, requires = "chain", value_parser = parse_count)]
    pub count: Option<usize>,

    /// Directory the workbooks are written to.
    #[arg(short, long, env = "MINTED_OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Derive Solana and Tron keys from the first 32 seed bytes, as older
    /// exports did.
    #[arg(long)]
    pub legacy_seed_prefix: bool,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, env = "MINTED_LOG", default_value = "warn")]
    pub log_level: String,

    /// Do not print generated wallets.
    #[arg(short, long)]
    pub quiet: bool,
}

fn parse_chain(s: &str) -> Result<ChainType, String> {
    s.parse().map_err(|e: minted::Error| e.to_string())
}

/// Parse a strictly positive wallet count.
pub fn parse_count(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("\"{}\" is not a positive integer", s.trim())),
    }
}
