//! Spreadsheet export of wallet batches.

use std::fs;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook};
use tracing::info;

use crate::{Batch, ChainType, Error, Result};

/// Header titles and column widths of the exported worksheet.
pub const COLUMNS: [(&str, f64); 4] = [
    ("Type", 20.0),
    ("Mnemonic", 50.0),
    ("Private Key", 70.0),
    ("Address", 45.0),
];

/// Writes each batch to `<chain id>_wallets.xlsx` in an output directory.
///
/// An existing file for the same chain is overwritten.
#[derive(Debug, Clone)]
pub struct Exporter {
    output_dir: PathBuf,
}

impl Exporter {
    /// Create an exporter writing into `output_dir`.
    ///
    /// The directory is created on first export if it does not exist.
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Directory receiving the workbooks.
    #[inline]
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path of the workbook for `chain`.
    #[must_use]
    pub fn path_for(&self, chain: ChainType) -> PathBuf {
        self.output_dir.join(format!("{}_wallets.xlsx", chain.id()))
    }

    /// Write `batch` to its workbook and return the file path.
    ///
    /// The batch is consumed and its secrets are wiped once written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NothingToExport`] for an empty batch (no file is
    /// written), [`Error::Io`] if the output directory cannot be created, and
    /// [`Error::Export`] if the workbook cannot be written.
    pub fn export(&self, batch: Batch) -> Result<PathBuf> {
        if batch.is_empty() {
            return Err(Error::NothingToExport(batch.chain()));
        }

        fs::create_dir_all(&self.output_dir)?;
        let path = self.path_for(batch.chain());

        let mut workbook = Workbook::new();
        let header = Format::new().set_bold();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(format!("{} Wallets", batch.chain().name()))?;

        for (col, (title, width)) in (0u16..).zip(COLUMNS) {
            worksheet.set_column_width(col, width)?;
            worksheet.write_string_with_format(0, col, title, &header)?;
        }

        for (row, record) in (1u32..).zip(&batch) {
            worksheet.write_string(row, 0, record.chain.name())?;
            worksheet.write_string(row, 1, record.mnemonic.as_str())?;
            worksheet.write_string(row, 2, record.private_key.as_str())?;
            worksheet.write_string(row, 3, record.address.as_str())?;
        }

        workbook.save(&path)?;
        info!(path = %path.display(), rows = batch.len(), "exported batch");
        Ok(path)
    }
}
