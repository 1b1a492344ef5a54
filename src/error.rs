// Error taxonomy for the exporter
//
// Startup errors (missing manifest / output folder / bad config) stop the run
// before any file is touched. Source read and parse errors are per-file and
// only abort the run when the parse failure policy says so.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("manifest file not found: {}", .0.display())]
    ManifestNotFound(PathBuf),

    #[error("output folder not found: {}", .0.display())]
    OutputFolderNotFound(PathBuf),

    #[error("failed to read manifest {}: {source}", .path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read source file {}: {source}", .path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {reason}")]
    Parse { path: String, reason: String },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ExportError {
    /// Per-file failures that the skip policy may downgrade to a warning.
    pub fn is_per_file(&self) -> bool {
        matches!(self, Self::SourceRead { .. } | Self::Parse { .. })
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;
