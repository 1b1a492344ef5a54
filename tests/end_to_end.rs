use std::fs;
use std::path::{Path, PathBuf};

use classname_exporter::{run, Config, ExportError};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn sample(name: &str) -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("test_samples")
        .join(name)
        .to_string_lossy()
        .to_string()
}

fn setup(manifest_lines: &[String]) -> (TempDir, Config) {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out");
    fs::create_dir(&out).unwrap();
    let manifest = dir.path().join("BaseReportClassInfo.txt");
    fs::write(&manifest, manifest_lines.join("\n")).unwrap();

    let config = Config {
        base_report_class_info_path: Some(manifest),
        output_folder: Some(out),
        ..Default::default()
    };
    (dir, config)
}

/// Report contents after the leading byte-order mark
fn out_file(dir: &TempDir, name: &str) -> String {
    let content = fs::read_to_string(dir.path().join("out").join(name)).unwrap();
    content
        .strip_prefix('\u{feff}')
        .expect("report starts with a byte-order mark")
        .to_string()
}

#[test]
fn exports_both_reports_from_designer_files() {
    let customer = sample("CustomerReport.Designer.cs");
    let order = sample("OrderReport.Designer.cs");
    let (dir, config) = setup(&[
        format!("CustomerReport\t{}\tignored column", customer),
        "malformed line without tab".to_string(),
        format!("Missing\t{}", sample("Missing.Designer.cs")),
        format!("OrderReport\t{}", order),
    ]);

    let summary = run(&config).unwrap();
    assert_eq!(summary.manifest_entries, 3);
    assert_eq!(summary.processed_files, 2);
    assert_eq!(summary.missing_files, 1);
    assert_eq!(summary.control_records, 4);
    assert_eq!(summary.report_entries, 2);

    // txtName has no label; lblName is listed twice but reported once
    let expected_text = [
        "FilePath\tSection\tName\tType\tClassName".to_string(),
        format!("{}\tgrpHeader\tlblName\tLabel\tCustomer Name", customer),
        format!("{}\tgrpHeader\tlblDate\tLabel\tIssue Date", customer),
        format!("{}\tdetail\tlblAmount\tLabel\tAmount", customer),
        format!("{}\tpageHeader\tlblOrderNo\tLabel\tOrder No", order),
    ]
    .map(|line| line + "\n")
    .concat();
    assert_eq!(out_file(&dir, "ReportControls.txt"), expected_text);

    let xml = out_file(&dir, "ReportControls.xml");
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
    let customer_at = xml.find("<Report ClassName=\"CustomerReport\">").unwrap();
    let order_at = xml.find("<Report ClassName=\"OrderReport\">").unwrap();
    assert!(customer_at < order_at);
    assert!(xml.contains("<ClassName>Customer Name</ClassName>"));
    assert!(!xml.contains("<Name>txtName</Name>"));
}

#[test]
fn same_identifier_keeps_last_file_in_xml_but_all_rows_in_text() {
    let customer = sample("CustomerReport.Designer.cs");
    let order = sample("OrderReport.Designer.cs");
    let (dir, config) = setup(&[
        format!("Shared\t{}", customer),
        format!("Shared\t{}", order),
    ]);

    let summary = run(&config).unwrap();
    assert_eq!(summary.report_entries, 1);

    let text = out_file(&dir, "ReportControls.txt");
    assert_eq!(text.lines().count(), 1 + 4);

    let xml = out_file(&dir, "ReportControls.xml");
    assert_eq!(xml.matches("<Report ").count(), 1);
    assert!(xml.contains("<Name>lblOrderNo</Name>"));
    assert!(!xml.contains("<Name>lblName</Name>"));
}

#[test]
fn missing_output_folder_stops_before_processing() {
    let (dir, mut config) = setup(&[format!("CustomerReport\t{}", sample("CustomerReport.Designer.cs"))]);
    let missing: PathBuf = dir.path().join("does-not-exist");
    config.output_folder = Some(missing.clone());

    match run(&config) {
        Err(ExportError::OutputFolderNotFound(path)) => assert_eq!(path, missing),
        other => panic!("expected OutputFolderNotFound, got {:?}", other),
    }
}
