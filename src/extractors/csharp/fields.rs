// C# Field Declaration Extraction

use super::helpers;
use crate::extractors::base::{BaseExtractor, FieldInfo};
use tree_sitter::Node;

/// One `FieldInfo` per declarator: `private Label a, b;` yields `a` and `b`,
/// both typed `Label`. Modifiers and type are not filtered.
pub fn extract_field(base: &BaseExtractor, node: Node) -> Vec<FieldInfo> {
    let Some(var_declaration) = base.find_child_by_type(&node, "variable_declaration") else {
        return Vec::new();
    };
    let Some(declared_type) = helpers::declared_type(base, &var_declaration) else {
        return Vec::new();
    };

    base.find_children_by_type(&var_declaration, "variable_declarator")
        .iter()
        .filter_map(|declarator| helpers::declarator_name(base, declarator))
        .map(|name| FieldInfo {
            name,
            declared_type: declared_type.clone(),
        })
        .collect()
}
