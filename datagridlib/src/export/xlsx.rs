//! XLSX workbook exporter.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook};
use tracing::info;

use super::{ExportReport, ExportSheet, SheetExporter};
use crate::data::CellValue;
use crate::Result;

/// Writes a sheet as a one-worksheet workbook inside a target directory.
///
/// The worksheet is named after the sheet, the header row is bold, numbers
/// are stored as numbers and missing fields are left blank.
#[derive(Debug, Clone)]
pub struct XlsxExporter {
    dir: PathBuf,
}

impl XlsxExporter {
    /// Exporter writing into `dir`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

impl SheetExporter for XlsxExporter {
    fn extension(&self) -> &str {
        "xlsx"
    }

    fn export(&mut self, sheet: &ExportSheet, file_name: &str) -> Result<ExportReport> {
        super::ensure_dir(&self.dir)?;
        let path = self.dir.join(file_name);

        let mut workbook = Workbook::new();
        let bold = Format::new().set_bold();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&sheet.name)?;

        for (col, header) in sheet.headers.iter().enumerate() {
            worksheet.write_string_with_format(0, column_number(col), header, &bold)?;
        }
        for (index, record) in sheet.records.iter().enumerate() {
            // saturates so oversized sheets fail on the writer's row limit
            let row = u32::try_from(index + 1).unwrap_or(u32::MAX);
            for (col, header) in sheet.headers.iter().enumerate() {
                match record.get(header) {
                    Some(CellValue::Number(n)) => {
                        worksheet.write_number(row, column_number(col), *n)?;
                    }
                    Some(CellValue::Text(s)) => {
                        worksheet.write_string(row, column_number(col), s)?;
                    }
                    None => {}
                }
            }
        }

        workbook.save(&path)?;

        info!(
            path = %path.display(),
            records = sheet.records.len(),
            "exported workbook sheet '{}'",
            sheet.name
        );

        Ok(ExportReport {
            path,
            sheet: sheet.name.clone(),
            records: sheet.records.len(),
        })
    }
}

fn column_number(col: usize) -> u16 {
    u16::try_from(col).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Row;
    use crate::error::TableError;
    use crate::options::TableOptions;
    use calamine::{open_workbook, Data, Reader, Xlsx};
    use tempfile::tempdir;

    #[test]
    fn test_workbook_has_named_sheet_and_rows() {
        let dir = tempdir().unwrap();
        let a = Row::new("row-1").with("name", "Acme, Inc").with("amount", 10.0);
        let b = Row::new("row-2").with("name", "Globex").with("amount", 2.5);
        let sheet = ExportSheet::from_rows(&[&a, &b], &[], &TableOptions::default());

        let report = XlsxExporter::new(dir.path())
            .export(&sheet, "table-data.xlsx")
            .unwrap();
        assert_eq!(report.records, 2);
        assert!(report.path.ends_with("table-data.xlsx"));

        let mut workbook: Xlsx<_> = open_workbook(&report.path).unwrap();
        assert_eq!(workbook.sheet_names(), vec!["Table Data".to_string()]);

        let range = workbook.worksheet_range("Table Data").unwrap();
        assert_eq!(range.height(), 3);
        assert_eq!(
            range.get_value((0, 0)),
            Some(&Data::String("id".to_string()))
        );
        assert_eq!(
            range.get_value((1, 1)),
            Some(&Data::String("Acme, Inc".to_string()))
        );
        assert_eq!(range.get_value((2, 2)), Some(&Data::Float(2.5)));
    }

    #[test]
    fn test_custom_sheet_name_and_empty_sheet() {
        let dir = tempdir().unwrap();
        let options = TableOptions::new().sheet_name("Orders");
        let sheet = ExportSheet::from_rows(&[], &[], &options);

        let report = XlsxExporter::new(dir.path().join("nested"))
            .export(&sheet, "orders.xlsx")
            .unwrap();
        assert_eq!(report.sheet, "Orders");
        assert_eq!(report.records, 0);

        let mut workbook: Xlsx<_> = open_workbook(&report.path).unwrap();
        let range = workbook.worksheet_range("Orders").unwrap();
        assert_eq!(range.height(), 1);
    }

    #[test]
    fn test_invalid_sheet_name_is_an_error() {
        let dir = tempdir().unwrap();
        let options = TableOptions::new().sheet_name("bad/name");
        let sheet = ExportSheet::from_rows(&[], &[], &options);

        let result = XlsxExporter::new(dir.path()).export(&sheet, "bad.xlsx");
        assert!(matches!(result, Err(TableError::Xlsx(_))));
    }
}
