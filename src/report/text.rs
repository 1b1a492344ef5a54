//! Tab-delimited flat report (`ReportControls.txt`)

use super::{write_with_bom, FlatRow};
use crate::error::Result;
use std::path::Path;

pub const HEADER: &str = "FilePath\tSection\tName\tType\tClassName";

/// Header line plus one line per row, each terminated by `\n`.
pub fn render_text(rows: &[FlatRow]) -> String {
    let mut output = String::with_capacity(HEADER.len() + 1 + rows.len() * 64);
    output.push_str(HEADER);
    output.push('\n');
    for row in rows {
        let record = &row.record;
        output.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\n",
            row.file_path, record.section, record.name, record.control_type, record.class_name
        ));
    }
    output
}

pub fn write_text_report(path: &Path, rows: &[FlatRow]) -> Result<()> {
    write_with_bom(path, &render_text(rows))
}
