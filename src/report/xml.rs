//! Hierarchical report (`ReportControls.xml`) written with quick-xml

use super::{write_with_bom, ReportEntry};
use crate::error::{ExportError, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io;
use std::path::Path;

fn to_io_error<E: std::fmt::Display>(error: E) -> io::Error {
    io::Error::other(error.to_string())
}

fn write_text_element<W: io::Write>(writer: &mut Writer<W>, name: &str, text: &str) -> io::Result<()> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(to_io_error)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(to_io_error)?;
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(to_io_error)?;
    Ok(())
}

/// `<Reports>` with one `<Report ClassName="identifier">` per entry and one
/// `<Control>` per record, in accumulation order.
pub fn render_xml(entries: &[ReportEntry]) -> io::Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
        .map_err(to_io_error)?;

    if entries.is_empty() {
        writer
            .write_event(Event::Empty(BytesStart::new("Reports")))
            .map_err(to_io_error)?;
    } else {
        writer
            .write_event(Event::Start(BytesStart::new("Reports")))
            .map_err(to_io_error)?;
        for entry in entries {
            let report = BytesStart::new("Report")
                .with_attributes([("ClassName", entry.identifier.as_str())]);
            writer.write_event(Event::Start(report)).map_err(to_io_error)?;
            for control in &entry.controls {
                writer
                    .write_event(Event::Start(BytesStart::new("Control")))
                    .map_err(to_io_error)?;
                write_text_element(&mut writer, "Section", &control.section)?;
                write_text_element(&mut writer, "Name", &control.name)?;
                write_text_element(&mut writer, "Type", &control.control_type)?;
                write_text_element(&mut writer, "ClassName", &control.class_name)?;
                writer
                    .write_event(Event::End(BytesEnd::new("Control")))
                    .map_err(to_io_error)?;
            }
            writer
                .write_event(Event::End(BytesEnd::new("Report")))
                .map_err(to_io_error)?;
        }
        writer
            .write_event(Event::End(BytesEnd::new("Reports")))
            .map_err(to_io_error)?;
    }

    String::from_utf8(writer.into_inner()).map_err(to_io_error)
}

pub fn write_xml_report(path: &Path, entries: &[ReportEntry]) -> Result<()> {
    let document = render_xml(entries).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    write_with_bom(path, &document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::correlate::ControlRecord;
    use crate::report::UTF8_BOM;

    fn entry(identifier: &str, records: &[(&str, &str, &str, &str)]) -> ReportEntry {
        ReportEntry {
            identifier: identifier.to_string(),
            controls: records
                .iter()
                .map(|(section, name, control_type, class_name)| ControlRecord {
                    section: section.to_string(),
                    name: name.to_string(),
                    control_type: control_type.to_string(),
                    class_name: class_name.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_empty_document() {
        let xml = render_xml(&[]).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
        assert!(xml.contains("<Reports/>"));
    }

    #[test]
    fn test_report_structure() {
        let xml = render_xml(&[entry(
            "CustomerReport",
            &[("grpHeader", "lblName", "Label", "Customer Name")],
        )])
        .unwrap();

        assert!(xml.contains("<Report ClassName=\"CustomerReport\">"));
        assert!(xml.contains("<Section>grpHeader</Section>"));
        assert!(xml.contains("<Name>lblName</Name>"));
        assert!(xml.contains("<Type>Label</Type>"));
        assert!(xml.contains("<ClassName>Customer Name</ClassName>"));

        let report = xml.find("<Report ").unwrap();
        let control = xml.find("<Control>").unwrap();
        let section = xml.find("<Section>").unwrap();
        let class_name = xml.find("<ClassName>").unwrap();
        assert!(report < control && control < section && section < class_name);
    }

    #[test]
    fn test_controls_keep_order_within_report() {
        let xml = render_xml(&[entry(
            "R",
            &[
                ("detail", "zeta", "Label", "Z"),
                ("detail", "alpha", "Label", "A"),
            ],
        )])
        .unwrap();
        assert!(xml.find("<Name>zeta</Name>").unwrap() < xml.find("<Name>alpha</Name>").unwrap());
    }

    #[test]
    fn test_values_are_escaped() {
        let xml = render_xml(&[entry(
            "Q&A \"Report\"",
            &[("grp", "lbl", "", "<Total> & Tax")],
        )])
        .unwrap();

        assert!(xml.contains("&lt;Total&gt; &amp; Tax"));
        assert!(xml.contains("Q&amp;A"));
        assert!(!xml.contains("<Total>"));
    }

    #[test]
    fn test_written_file_starts_with_bom() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("ReportControls.xml");
        write_xml_report(&path, &[entry("R", &[("grp", "lbl", "Label", "帳票")])]).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..3], UTF8_BOM);
        assert!(bytes[3..].starts_with(b"<?xml version=\"1.0\""));
    }
}
