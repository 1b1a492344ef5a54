//! Language Support - Shared tree-sitter language configuration
//!
//! Designer-generated sources are C#, but grammar selection stays behind this
//! lookup so the extractor manager never touches grammar crates directly.

use anyhow::Result;

/// Get tree-sitter language parser for a given language name
///
/// This is the SINGLE SOURCE OF TRUTH for grammar selection.
pub fn get_tree_sitter_language(language: &str) -> Result<tree_sitter::Language> {
    match language {
        "csharp" => Ok(tree_sitter_c_sharp::LANGUAGE.into()),
        _ => Err(anyhow::anyhow!(
            "Unsupported language: '{}'. Supported languages: csharp",
            language
        )),
    }
}
