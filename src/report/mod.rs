//! Report Builder - accumulates per-file control records across a run
//!
//! Two shapes are kept side by side:
//! - a flat row list (every record of every file, tagged with its file path)
//! - nested report entries keyed by report identifier

pub mod text;
pub mod xml;

use crate::correlate::ControlRecord;
use crate::error::{ExportError, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Both reports start with a UTF-8 byte-order mark so spreadsheet tools pick
/// the right encoding for non-ASCII labels.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Write `document` to `path` behind a UTF-8 byte-order mark.
fn write_with_bom(path: &Path, document: &str) -> Result<()> {
    let write_error = |source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(write_error)?;
    file.write_all(UTF8_BOM).map_err(write_error)?;
    file.write_all(document.as_bytes()).map_err(write_error)
}

/// A control record tagged with the source file it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRow {
    pub file_path: String,
    pub record: ControlRecord,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub identifier: String,
    pub controls: Vec<ControlRecord>,
}

#[derive(Debug, Default)]
pub struct ReportBuilder {
    rows: Vec<FlatRow>,
    entries: Vec<ReportEntry>,
    /// identifier → position in `entries`
    index: HashMap<String, usize>,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one processed file.
    ///
    /// Rows are always appended. A non-empty record list replaces any earlier
    /// entry for the same identifier, keeping that entry's original position.
    pub fn add_file(&mut self, identifier: &str, file_path: &str, controls: Vec<ControlRecord>) {
        self.rows.extend(controls.iter().map(|record| FlatRow {
            file_path: file_path.to_string(),
            record: record.clone(),
        }));

        if controls.is_empty() {
            return;
        }

        if let Some(&position) = self.index.get(identifier) {
            self.entries[position].controls = controls;
            return;
        }
        self.index.insert(identifier.to_string(), self.entries.len());
        self.entries.push(ReportEntry {
            identifier: identifier.to_string(),
            controls,
        });
    }

    pub fn rows(&self) -> &[FlatRow] {
        &self.rows
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn entry(&self, identifier: &str) -> Option<&ReportEntry> {
        self.index.get(identifier).map(|&position| &self.entries[position])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(section: &str, name: &str) -> ControlRecord {
        ControlRecord {
            section: section.to_string(),
            name: name.to_string(),
            control_type: "Label".to_string(),
            class_name: format!("{} label", name),
        }
    }

    #[test]
    fn test_same_identifier_keeps_latest_controls_and_all_rows() {
        let mut builder = ReportBuilder::new();
        builder.add_file("Invoice", "a/Invoice.Designer.cs", vec![record("header", "lblA")]);
        builder.add_file("Receipt", "b/Receipt.Designer.cs", vec![record("detail", "lblR")]);
        builder.add_file("Invoice", "c/Invoice.Designer.cs", vec![record("footer", "lblC")]);

        let files: Vec<&str> = builder.rows().iter().map(|r| r.file_path.as_str()).collect();
        assert_eq!(
            files,
            vec![
                "a/Invoice.Designer.cs",
                "b/Receipt.Designer.cs",
                "c/Invoice.Designer.cs"
            ]
        );

        let identifiers: Vec<&str> = builder
            .entries()
            .iter()
            .map(|e| e.identifier.as_str())
            .collect();
        assert_eq!(identifiers, vec!["Invoice", "Receipt"]);
        assert_eq!(
            builder.entry("Invoice").unwrap().controls,
            vec![record("footer", "lblC")]
        );
    }

    #[test]
    fn test_empty_file_adds_no_entry_and_keeps_previous() {
        let mut builder = ReportBuilder::new();
        builder.add_file("Invoice", "Invoice.Designer.cs", vec![record("header", "lblA")]);
        builder.add_file("Invoice", "Empty.Designer.cs", Vec::new());
        builder.add_file("Blank", "Blank.Designer.cs", Vec::new());

        assert_eq!(builder.rows().len(), 1);
        assert_eq!(builder.entries().len(), 1);
        assert_eq!(
            builder.entry("Invoice").unwrap().controls,
            vec![record("header", "lblA")]
        );
        assert!(builder.entry("Blank").is_none());
    }
}
