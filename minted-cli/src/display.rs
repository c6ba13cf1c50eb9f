//! Terminal rendering of generated wallets.

use std::io::{self, Write};

use colored::Colorize;
use minted::WalletRecord;

/// Write one record in the aligned label/value layout.
#[rustfmt::skip]
pub fn write_record(out: &mut impl Write, index: usize, record: &WalletRecord) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "      {}       {}", "Wallet".cyan().bold(), format!("[{}] {}", index + 1, record.chain).dimmed())?;
    writeln!(out, "      {}     {}", "Mnemonic".cyan().bold(), record.mnemonic.as_str())?;
    writeln!(out, "      {}  {}", "Private Key".cyan().bold(), record.private_key.as_str())?;
    writeln!(out, "      {}      {}", "Address".cyan().bold(), record.address.green())?;
    Ok(())
}
