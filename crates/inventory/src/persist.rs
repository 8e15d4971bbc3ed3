//! Saving and loading ledgers to files on disk.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tracing::info;

use stockledger_core::LedgerResult;

use crate::codec::LoadReport;
use crate::ledger::Ledger;

impl Ledger {
    /// Rewrite `path` with the current records.
    ///
    /// Records are validated before the file is created, so a ledger that
    /// cannot be represented leaves any existing file untouched.
    pub fn save(&self, path: impl AsRef<Path>) -> LedgerResult<()> {
        let path = path.as_ref();
        self.check_serializable()?;

        let mut writer = BufWriter::new(File::create(path)?);
        self.write_records(&mut writer)?;
        writer.flush()?;

        info!(path = %path.display(), records = self.len(), "inventory saved");
        Ok(())
    }

    /// Replace the ledger with the contents of `path`.
    ///
    /// If the file cannot be opened the ledger is left as it was.
    pub fn load(&mut self, path: impl AsRef<Path>) -> LedgerResult<LoadReport> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let report = self.deserialize(BufReader::new(file))?;

        info!(
            path = %path.display(),
            loaded = report.loaded,
            skipped = report.skipped_count(),
            "inventory loaded"
        );
        Ok(report)
    }
}
