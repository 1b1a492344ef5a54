// BaseExtractor implementation
//
// Holds the per-file context every extractor needs: where the source came from
// and the text its tree was parsed from.

use tree_sitter::Node;

/// Base implementation for designer extractors
pub struct BaseExtractor {
    pub language: String,
    /// Path as given in the manifest; only used for log context
    pub file_path: String,
    pub content: String,
}

impl BaseExtractor {
    pub fn new(language: String, file_path: String, content: String) -> Self {
        Self {
            language,
            file_path,
            content,
        }
    }

    /// Get text from a tree-sitter node
    pub fn get_node_text(&self, node: &Node) -> String {
        let start_byte = node.start_byte();
        let end_byte = node.end_byte();

        // Use byte slice but handle UTF-8 boundaries properly
        let content_bytes = self.content.as_bytes();
        if start_byte < content_bytes.len() && end_byte <= content_bytes.len() {
            String::from_utf8_lossy(&content_bytes[start_byte..end_byte]).to_string()
        } else {
            String::new()
        }
    }

    /// Get field text safely
    pub fn get_field_text(&self, node: &Node, field_name: &str) -> Option<String> {
        node.child_by_field_name(field_name)
            .map(|field_node| self.get_node_text(&field_node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::Parser;

    #[test]
    fn test_node_text_handles_multibyte_content() {
        let code = "class Report { string name = \"帳票の名前\"; }";
        let mut parser = Parser::new();
        parser
            .set_language(&crate::language::get_tree_sitter_language("csharp").unwrap())
            .unwrap();
        let tree = parser.parse(code, None).unwrap();
        let base = BaseExtractor::new(
            "csharp".to_string(),
            "Report.Designer.cs".to_string(),
            code.to_string(),
        );

        let class = base
            .find_nodes_by_type(&tree.root_node(), "class_declaration")
            .pop()
            .unwrap();
        assert_eq!(base.get_field_text(&class, "name").as_deref(), Some("Report"));
        assert_eq!(base.get_node_text(&tree.root_node()), code);
    }
}
