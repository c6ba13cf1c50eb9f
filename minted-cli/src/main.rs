//! Minted - generate wallets for six chains and export them to Excel.
//!
//! Runs an interactive prompt loop by default, or a single batch when both
//! `--chain` and `--count` are given.

mod config;
mod display;
mod logging;
mod session;

use std::io;

use clap::Parser;
use config::Cli;
use minted::{BatchGenerator, Exporter, WalletDeriver};
use session::Session;
use tracing::warn;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    logging::init(&cli.log_level)?;

    if cli.legacy_seed_prefix {
        warn!("seed-prefix derivation enabled, Solana and Tron wallets will not match wallet software");
    }

    let deriver = WalletDeriver::new().with_legacy_seed_prefix(cli.legacy_seed_prefix);
    let mut session = Session::new(
        io::stdin().lock(),
        io::stdout().lock(),
        BatchGenerator::new(deriver),
        Exporter::new(cli.output_dir),
    )
    .quiet(cli.quiet);

    match (cli.chain, cli.count) {
        (Some(chain), Some(count)) => {
            session.run_once(chain, count)?;
        }
        _ => session.run()?,
    }
    Ok(())
}
