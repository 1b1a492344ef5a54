use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{ExportError, Result};

pub const CONFIG_FILE_NAME: &str = "classname-exporter.json";

pub const TEXT_REPORT_FILE_NAME: &str = "ReportControls.txt";
pub const XML_REPORT_FILE_NAME: &str = "ReportControls.xml";

/// What to do with a source file that cannot be read or parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum ParseFailurePolicy {
    /// Stop the whole run; no report is written.
    #[default]
    Abort,
    /// Log a warning and continue with the next manifest entry.
    Skip,
}

/// Member names that identify the designer statements of interest.
///
/// `this.<owner>.<label_member> = "..."` assigns a label, and
/// `this.<owner>.<collection_member>.<grouping_method>(...)` registers members.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternConfig {
    #[serde(default = "default_label_member")]
    pub label_member: String,
    #[serde(default = "default_collection_member")]
    pub collection_member: String,
    #[serde(default = "default_grouping_method")]
    pub grouping_method: String,
}

fn default_label_member() -> String {
    "ClassName".to_string()
}

fn default_collection_member() -> String {
    "Controls".to_string()
}

fn default_grouping_method() -> String {
    "AddRange".to_string()
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            label_member: default_label_member(),
            collection_member: default_collection_member(),
            grouping_method: default_grouping_method(),
        }
    }
}

impl PatternConfig {
    fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("labelMember", &self.label_member),
            ("collectionMember", &self.collection_member),
            ("groupingMethod", &self.grouping_method),
        ] {
            if !is_identifier(value) {
                return Err(ExportError::Config(format!(
                    "'patterns.{}' must be a C# identifier, got \"{}\"",
                    key, value
                )));
            }
        }
        Ok(())
    }
}

fn is_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Tab-separated manifest: `<reportIdentifier>\t<sourceFilePath>`.
    #[serde(default, alias = "manifestPath")]
    pub base_report_class_info_path: Option<PathBuf>,
    #[serde(default)]
    pub output_folder: Option<PathBuf>,
    #[serde(default)]
    pub on_parse_failure: ParseFailurePolicy,
    /// Treat trees containing ERROR/MISSING nodes as parse failures.
    #[serde(default)]
    pub strict_syntax: bool,
    #[serde(default)]
    pub parallel: bool,
    #[serde(default)]
    pub patterns: PatternConfig,
}

impl Config {
    /// Read a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ExportError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            ExportError::Config(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    /// Load an explicit config file, or `classname-exporter.json` from `dir` when present,
    /// or fall back to defaults.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        let default_path = dir.join(CONFIG_FILE_NAME);
        if default_path.is_file() {
            Self::from_file(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.base_report_class_info_path.is_none() {
            return Err(ExportError::Config(
                "'baseReportClassInfoPath' is not set".to_string(),
            ));
        }
        if self.output_folder.is_none() {
            return Err(ExportError::Config("'outputFolder' is not set".to_string()));
        }
        self.patterns.validate()
    }

    pub fn manifest_path(&self) -> Result<&Path> {
        self.base_report_class_info_path
            .as_deref()
            .ok_or_else(|| ExportError::Config("'baseReportClassInfoPath' is not set".to_string()))
    }

    pub fn output_folder(&self) -> Result<&Path> {
        self.output_folder
            .as_deref()
            .ok_or_else(|| ExportError::Config("'outputFolder' is not set".to_string()))
    }

    pub fn text_report_path(&self) -> Result<PathBuf> {
        Ok(self.output_folder()?.join(TEXT_REPORT_FILE_NAME))
    }

    pub fn xml_report_path(&self) -> Result<PathBuf> {
        Ok(self.output_folder()?.join(XML_REPORT_FILE_NAME))
    }
}
