//! Manifest parsing
//!
//! One entry per line: `<reportIdentifier>\t<sourceFilePath>[\t...]`. Extra
//! columns are ignored and lines with fewer than two columns are skipped.

use crate::error::{ExportError, Result};
use std::fs;
use std::path::Path;

const UTF8_BOM: char = '\u{feff}';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub identifier: String,
    pub source_path: String,
}

pub fn parse_manifest(content: &str) -> Vec<ManifestEntry> {
    content
        .trim_start_matches(UTF8_BOM)
        .lines()
        .filter_map(|line| {
            let mut columns = line.split('\t');
            let identifier = columns.next()?;
            let source_path = columns.next()?;
            Some(ManifestEntry {
                identifier: identifier.to_string(),
                source_path: source_path.to_string(),
            })
        })
        .collect()
}

pub fn read_manifest(path: &Path) -> Result<Vec<ManifestEntry>> {
    let content = fs::read_to_string(path).map_err(|source| ExportError::ManifestRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_manifest(&content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(identifier: &str, source_path: &str) -> ManifestEntry {
        ManifestEntry {
            identifier: identifier.to_string(),
            source_path: source_path.to_string(),
        }
    }

    #[test]
    fn test_parse_skips_short_lines_and_ignores_extra_columns() {
        let content = "\u{feff}Invoice\tsrc/Invoice.Designer.cs\n\
                       just-one-column\n\
                       \n\
                       Receipt\tsrc/Receipt.Designer.cs\tnote\textra\r\n";
        assert_eq!(
            parse_manifest(content),
            vec![
                entry("Invoice", "src/Invoice.Designer.cs"),
                entry("Receipt", "src/Receipt.Designer.cs"),
            ]
        );
    }

    #[test]
    fn test_empty_columns_are_kept() {
        assert_eq!(parse_manifest("\tA.Designer.cs"), vec![entry("", "A.Designer.cs")]);
    }

    #[test]
    fn test_read_missing_manifest_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = read_manifest(&dir.path().join("missing.tsv")).unwrap_err();
        assert!(matches!(err, ExportError::ManifestRead { .. }));
    }
}
