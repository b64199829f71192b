//! CSV sheet exporter.

use std::path::{Path, PathBuf};

use tracing::info;

use super::{ExportReport, ExportSheet, SheetExporter};
use crate::error::TableError;
use crate::Result;

/// Writes a sheet as a single CSV file inside a target directory.
///
/// CSV holds exactly one sheet; the sheet name is reported back in the
/// [`ExportReport`] rather than stored in the file.
#[derive(Debug, Clone)]
pub struct CsvExporter {
    dir: PathBuf,
}

impl CsvExporter {
    /// Exporter writing into `dir`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

impl SheetExporter for CsvExporter {
    fn extension(&self) -> &str {
        "csv"
    }

    fn export(&mut self, sheet: &ExportSheet, file_name: &str) -> Result<ExportReport> {
        super::ensure_dir(&self.dir)?;
        let path = self.dir.join(file_name);
        let mut writer = ::csv::Writer::from_path(&path)?;

        writer.write_record(&sheet.headers)?;
        for index in 0..sheet.records.len() {
            let cells: Vec<String> = sheet
                .headers
                .iter()
                .map(|h| sheet.cell(index, h))
                .collect();
            writer.write_record(&cells)?;
        }
        writer.flush().map_err(|source| TableError::ExportWrite {
            path: path.clone(),
            source,
        })?;

        info!(
            path = %path.display(),
            records = sheet.records.len(),
            "exported sheet '{}'",
            sheet.name
        );

        Ok(ExportReport {
            path,
            sheet: sheet.name.clone(),
            records: sheet.records.len(),
        })
    }
}
