//! Interactive prompt loop.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use colored::Colorize;
use minted::{Batch, BatchGenerator, ChainType, Error, Exporter};
use tracing::error;

use crate::config::parse_count;
use crate::display::write_record;

/// Where the session is between prompts.
enum State {
    /// Asking for a chain and a count.
    Prompting,
    /// Holding a generated batch until it is written.
    Exporting(Batch),
}

/// Prompt loop reading answers from `input` and writing to `output`.
pub struct Session<R, W> {
    input: R,
    output: W,
    generator: BatchGenerator,
    exporter: Exporter,
    quiet: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, generator: BatchGenerator, exporter: Exporter) -> Self {
        Self {
            input,
            output,
            generator,
            exporter,
            quiet: false,
        }
    }

    /// Skip printing each generated wallet.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Prompt for batches until the user declines or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", "Crypto wallet generator".bold())?;
        writeln!(self.output, "-----------------------")?;

        let mut state = Some(State::Prompting);
        while let Some(current) = state {
            state = match current {
                State::Prompting => self.prompt_batch()?.map(State::Exporting),
                State::Exporting(batch) => {
                    self.export(batch)?;
                    self.ask_again()?.then_some(State::Prompting)
                }
            };
        }

        writeln!(self.output, "Done!")?;
        Ok(())
    }

    /// Generate and export a single batch without prompting.
    pub fn run_once(
        &mut self,
        chain: ChainType,
        count: usize,
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let batch = self.generate(chain, count)?;
        let path = self.exporter.export(batch)?;
        writeln!(self.output, "{} {}", "Exported".green().bold(), path.display())?;
        Ok(path)
    }

    fn prompt_batch(&mut self) -> io::Result<Option<Batch>> {
        let Some(chain) = self.ask_chain()? else {
            return Ok(None);
        };
        let Some(count) = self.ask_count()? else {
            return Ok(None);
        };
        self.generate(chain, count).map(Some)
    }

    fn generate(&mut self, chain: ChainType, count: usize) -> io::Result<Batch> {
        writeln!(self.output, "Generating {count} {chain} wallets...")?;
        let batch = self.generator.generate(chain, count);

        if !self.quiet {
            for (index, record) in batch.records().iter().enumerate() {
                write_record(&mut self.output, index, record)?;
            }
            writeln!(self.output)?;
        }
        if batch.failures() > 0 {
            writeln!(
                self.output,
                "{} {} of {count} wallets failed and were skipped",
                "Warning:".yellow().bold(),
                batch.failures()
            )?;
        }
        Ok(batch)
    }

    fn export(&mut self, batch: Batch) -> io::Result<()> {
        match self.exporter.export(batch) {
            Ok(path) => writeln!(self.output, "{} {}", "Exported".green().bold(), path.display()),
            Err(Error::NothingToExport(chain)) => {
                writeln!(self.output, "No {chain} wallets were generated, nothing to export.")
            }
            Err(err) => {
                error!(error = %err, "export failed");
                writeln!(self.output, "{} {err}", "Export failed:".red().bold())
            }
        }
    }

    fn ask_chain(&mut self) -> io::Result<Option<ChainType>> {
        let prompt = format!("Which chain? ({}): ", ChainType::id_list());
        loop {
            let Some(answer) = self.read_line(&prompt)? else {
                return Ok(None);
            };
            match answer.parse() {
                Ok(chain) => return Ok(Some(chain)),
                Err(err) => writeln!(self.output, "{}", err.to_string().red())?,
            }
        }
    }

    fn ask_count(&mut self) -> io::Result<Option<usize>> {
        loop {
            let Some(answer) = self.read_line("How many wallets? ")? else {
                return Ok(None);
            };
            match parse_count(&answer) {
                Ok(count) => return Ok(Some(count)),
                Err(msg) => writeln!(self.output, "{}", msg.red())?,
            }
        }
    }

    fn ask_again(&mut self) -> io::Result<bool> {
        let answer = self.read_line("Generate more wallets? (yes/no): ")?;
        Ok(answer.is_some_and(|a| is_yes(&a)))
    }

    /// Print `prompt` and read one trimmed line, `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

fn is_yes(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("yes") || answer.eq_ignore_ascii_case("y")
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use minted::WalletDeriver;

    use super::*;

    fn run_session(input: &str, dir: &Path, quiet: bool) -> String {
        let mut output = Vec::new();
        Session::new(
            input.as_bytes(),
            &mut output,
            BatchGenerator::new(WalletDeriver::new()),
            Exporter::new(dir),
        )
        .quiet(quiet)
        .run()
        .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_single_batch() {
        let dir = tempfile::tempdir().unwrap();
        let output = run_session("eth\n2\nno\n", dir.path(), false);

        assert!(dir.path().join("eth_wallets.xlsx").is_file());
        assert!(output.contains("Generating 2 Ethereum wallets"));
        assert!(output.contains("[2] Ethereum"));
        assert!(output.contains("Exported"));
        assert!(output.ends_with("Done!\n"));
    }

    #[test]
    fn test_invalid_chain_reprompts() {
        let dir = tempfile::tempdir().unwrap();
        let output = run_session("doge\nsol\n1\nn\n", dir.path(), true);

        assert!(output.contains("unsupported chain \"doge\""));
        assert_eq!(output.matches("Which chain?").count(), 2);
        assert!(dir.path().join("sol_wallets.xlsx").is_file());
    }

    #[test]
    fn test_invalid_count_reprompts_count_only() {
        let dir = tempfile::tempdir().unwrap();
        let output = run_session("btc\nabc\n0\n-3\n1\nno\n", dir.path(), true);

        assert_eq!(output.matches("is not a positive integer").count(), 3);
        assert_eq!(output.matches("Which chain?").count(), 1);
        assert!(dir.path().join("btc_wallets.xlsx").is_file());
    }

    #[test]
    fn test_yes_starts_another_batch() {
        let dir = tempfile::tempdir().unwrap();
        run_session("eth\n1\nYES\ntron\n1\nno\n", dir.path(), true);

        assert!(dir.path().join("eth_wallets.xlsx").is_file());
        assert!(dir.path().join("tron_wallets.xlsx").is_file());
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let dir = tempfile::tempdir().unwrap();

        let output = run_session("", dir.path(), false);
        assert!(output.ends_with("Done!\n"));

        run_session("cosmos\n", dir.path(), false);
        run_session("bsc\n1\n", dir.path(), true);

        assert!(!dir.path().join("cosmos_wallets.xlsx").exists());
        assert!(dir.path().join("bsc_wallets.xlsx").is_file());
    }

    #[test]
    fn test_export_failure_keeps_prompting() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("wallets");
        std::fs::write(&blocker, b"taken").unwrap();

        let output = run_session("eth\n1\nyes\ntron\n1\nno\n", &blocker, true);

        assert_eq!(output.matches("Export failed").count(), 2);
        assert_eq!(output.matches("Which chain?").count(), 2);
        assert!(output.ends_with("Done!\n"));
    }

    #[test]
    fn test_quiet_hides_secrets() {
        let dir = tempfile::tempdir().unwrap();
        let output = run_session("sol\n1\nno\n", dir.path(), true);
        assert!(!output.contains("Mnemonic"));
    }

    #[test]
    fn test_run_once() {
        let dir = tempfile::tempdir().unwrap();
        let mut output = Vec::new();
        let mut session = Session::new(
            "".as_bytes(),
            &mut output,
            BatchGenerator::new(WalletDeriver::new()),
            Exporter::new(dir.path()),
        );

        let path = session.run_once(ChainType::Cosmos, 2).unwrap();
        assert_eq!(path, dir.path().join("cosmos_wallets.xlsx"));
        assert!(path.is_file());
    }

    #[test]
    fn test_is_yes() {
        assert!(is_yes("yes"));
        assert!(is_yes("Y"));
        assert!(!is_yes("no"));
        assert!(!is_yes("yess"));
        assert!(!is_yes(""));
    }
}
