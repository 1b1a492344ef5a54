//! ExtractorManager - Public API for designer extraction
//!
//! Handles parser setup and delegates to the C# designer extractor. One manager
//! is built per run from the configured patterns and can be shared across
//! worker threads; each call creates its own parser.

use crate::config::PatternConfig;
use crate::error::{ExportError, Result};
use crate::extractors::base::ExtractionResults;
use crate::extractors::csharp::CSharpExtractor;
use tree_sitter::Parser;

const LANGUAGE: &str = "csharp";

#[derive(Debug, Clone, Default)]
pub struct ExtractorManager {
    patterns: PatternConfig,
    /// Reject trees that contain ERROR/MISSING nodes instead of extracting from them
    strict_syntax: bool,
}

impl ExtractorManager {
    pub fn new(patterns: PatternConfig, strict_syntax: bool) -> Self {
        Self {
            patterns,
            strict_syntax,
        }
    }

    /// Parse designer source and extract fields, labels and groupings
    pub fn extract_source(&self, file_path: &str, content: &str) -> Result<ExtractionResults> {
        let parse_error = |reason: String| ExportError::Parse {
            path: file_path.to_string(),
            reason,
        };

        let mut parser = Parser::new();
        let tree_sitter_language = crate::language::get_tree_sitter_language(LANGUAGE)
            .map_err(|e| parse_error(e.to_string()))?;
        parser.set_language(&tree_sitter_language).map_err(|e| {
            parse_error(format!("failed to set parser language for {}: {}", LANGUAGE, e))
        })?;

        let tree = parser
            .parse(content, None)
            .ok_or_else(|| parse_error("parser produced no syntax tree".to_string()))?;

        let extractor = CSharpExtractor::new(
            LANGUAGE.to_string(),
            file_path.to_string(),
            content.to_string(),
            &self.patterns,
        );
        let results = extractor.extract_all(&tree);

        if results.has_syntax_errors {
            if self.strict_syntax {
                return Err(parse_error("source contains syntax errors".to_string()));
            }
            tracing::warn!(
                "Syntax errors in {}; extracting from the recoverable parts of the tree",
                file_path
            );
        }

        Ok(results)
    }
}
