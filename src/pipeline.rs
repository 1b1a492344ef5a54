//! Export pipeline
//!
//! manifest → (per file) read → parse → extract → correlate → accumulate → write.
//! Files are independent; with `parallel` enabled they are processed on the
//! rayon pool and merged back in manifest order, so both reports are identical
//! to a sequential run.

use crate::config::{Config, ParseFailurePolicy};
use crate::correlate::{correlate, ControlRecord};
use crate::error::{ExportError, Result};
use crate::extractors::ExtractorManager;
use crate::manifest::{read_manifest, ManifestEntry};
use crate::report::text::write_text_report;
use crate::report::xml::write_xml_report;
use crate::report::ReportBuilder;
use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Counts reported after a completed run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub manifest_entries: usize,
    pub processed_files: usize,
    /// Entries whose source file does not exist
    pub missing_files: usize,
    /// Files skipped under `ParseFailurePolicy::Skip`
    pub failed_files: usize,
    pub control_records: usize,
    pub report_entries: usize,
    pub text_report: PathBuf,
    pub xml_report: PathBuf,
}

enum FileOutcome {
    Missing,
    Processed(Vec<ControlRecord>),
    Failed(ExportError),
}

/// Read a source file as UTF-8, dropping a leading byte-order mark.
pub fn read_source(path: &Path) -> Result<String> {
    let read_error = |source| ExportError::SourceRead {
        path: path.to_path_buf(),
        source,
    };
    let bytes = fs::read(path).map_err(read_error)?;
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(&bytes[..]);
    String::from_utf8(bytes.to_vec())
        .map_err(|e| read_error(io::Error::new(io::ErrorKind::InvalidData, e)))
}

fn process_entry(entry: &ManifestEntry, manager: &ExtractorManager) -> FileOutcome {
    let path = Path::new(&entry.source_path);
    if !path.is_file() {
        debug!("Skipping missing source file: {}", entry.source_path);
        return FileOutcome::Missing;
    }

    info!("Processing: {}", entry.source_path);
    let extracted = read_source(path)
        .and_then(|content| manager.extract_source(&entry.source_path, &content));
    match extracted {
        Ok(results) => FileOutcome::Processed(correlate(&results)),
        Err(e) => FileOutcome::Failed(e),
    }
}

/// Run one export: validate, process every manifest entry, write both reports.
pub fn run(config: &Config) -> Result<RunSummary> {
    config.validate()?;

    let manifest_path = config.manifest_path()?;
    if !manifest_path.is_file() {
        return Err(ExportError::ManifestNotFound(manifest_path.to_path_buf()));
    }
    let output_folder = config.output_folder()?;
    if !output_folder.is_dir() {
        return Err(ExportError::OutputFolderNotFound(output_folder.to_path_buf()));
    }

    let entries = read_manifest(manifest_path)?;
    let manager = ExtractorManager::new(config.patterns.clone(), config.strict_syntax);

    // Sequential runs stay lazy so an aborting failure stops further parsing
    let outcomes: Box<dyn Iterator<Item = FileOutcome> + '_> = if config.parallel {
        let collected: Vec<FileOutcome> = entries
            .par_iter()
            .map(|entry| process_entry(entry, &manager))
            .collect();
        Box::new(collected.into_iter())
    } else {
        Box::new(entries.iter().map(|entry| process_entry(entry, &manager)))
    };

    let mut summary = RunSummary {
        manifest_entries: entries.len(),
        ..Default::default()
    };
    let mut builder = ReportBuilder::new();

    for (entry, outcome) in entries.iter().zip(outcomes) {
        match outcome {
            FileOutcome::Missing => summary.missing_files += 1,
            FileOutcome::Processed(controls) => {
                summary.processed_files += 1;
                builder.add_file(&entry.identifier, &entry.source_path, controls);
            }
            FileOutcome::Failed(error) => {
                if !error.is_per_file() || config.on_parse_failure == ParseFailurePolicy::Abort {
                    return Err(error);
                }
                warn!("Skipping {}: {}", entry.source_path, error);
                summary.failed_files += 1;
            }
        }
    }

    summary.control_records = builder.rows().len();
    summary.report_entries = builder.entries().len();

    summary.text_report = config.text_report_path()?;
    write_text_report(&summary.text_report, builder.rows())?;
    info!("Text report written: {}", summary.text_report.display());

    summary.xml_report = config.xml_report_path()?;
    write_xml_report(&summary.xml_report, builder.entries())?;
    info!("XML report written: {}", summary.xml_report.display());

    Ok(summary)
}
