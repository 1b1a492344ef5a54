//! CLI argument definitions using clap.
//!
//! Every flag overrides the matching key of the JSON config file.

use std::path::PathBuf;

use clap::Parser;

use crate::config::ParseFailurePolicy;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Config file (defaults to ./classname-exporter.json when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Manifest of `<reportIdentifier>\t<sourceFilePath>` lines
    #[arg(long, env = "CLASSNAME_EXPORTER_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Folder that receives ReportControls.txt and ReportControls.xml
    #[arg(short, long, env = "CLASSNAME_EXPORTER_OUTPUT")]
    pub output_folder: Option<PathBuf>,

    /// What to do when a source file cannot be read or parsed
    #[arg(long, value_enum)]
    pub on_parse_failure: Option<ParseFailurePolicy>,

    /// Treat files with syntax errors as parse failures
    #[arg(long)]
    pub strict_syntax: bool,

    /// Process source files in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
