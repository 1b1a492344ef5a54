// C# Helper Methods
//
// Structural matching over tree-sitter-c-sharp nodes. Everything here works on
// node kinds and fields, never on the formatted source text, so whitespace,
// comments and line breaks inside a statement do not affect matching.

use crate::extractors::base::BaseExtractor;
use tree_sitter::Node;

pub fn is_this(node: &Node) -> bool {
    node.kind() == "this"
}

/// Resolve a `this`-rooted member access chain into its member path.
///
/// `this.grpHeader.Controls.AddRange` → `["grpHeader", "Controls", "AddRange"]`.
/// Returns `None` for chains rooted anywhere else (locals, static types, calls)
/// and for segments that are not plain identifiers.
pub fn self_member_path(base: &BaseExtractor, node: &Node) -> Option<Vec<String>> {
    let mut segments = Vec::new();
    let mut current = *node;

    loop {
        if is_this(&current) {
            break;
        }
        if current.kind() != "member_access_expression" {
            return None;
        }
        let name = current.child_by_field_name("name")?;
        if name.kind() != "identifier" {
            return None;
        }
        segments.push(base.get_node_text(&name));
        current = current.child_by_field_name("expression")?;
    }

    if segments.is_empty() {
        return None;
    }
    segments.reverse();
    Some(segments)
}

/// Member name of a single-step `this.<name>` access
pub fn self_member_name(base: &BaseExtractor, node: &Node) -> Option<String> {
    if node.kind() != "member_access_expression" {
        return None;
    }
    let object = node.child_by_field_name("expression")?;
    if !is_this(&object) {
        return None;
    }
    let name = node.child_by_field_name("name")?;
    (name.kind() == "identifier").then(|| base.get_node_text(&name))
}

/// Operator token of an assignment expression (`=`, `+=`, `??=`, ...)
pub fn assignment_operator(base: &BaseExtractor, node: &Node) -> Option<String> {
    let operator = node.child_by_field_name("operator")?;
    Some(base.get_node_text(&operator))
}

/// Raw contents of a regular or verbatim string literal, without its delimiters.
///
/// Escape sequences are kept exactly as written.
pub fn string_literal_content(base: &BaseExtractor, node: &Node) -> Option<String> {
    let text = base.get_node_text(node);
    let inner = match node.kind() {
        "string_literal" => text.strip_prefix('"')?.strip_suffix('"')?,
        "verbatim_string_literal" => text.strip_prefix("@\"")?.strip_suffix('"')?,
        _ => return None,
    };
    Some(inner.to_string())
}

/// Declared type text of a `variable_declaration`
pub fn declared_type(base: &BaseExtractor, var_declaration: &Node) -> Option<String> {
    base.get_field_text(var_declaration, "type")
}

/// Name introduced by a `variable_declarator`
pub fn declarator_name(base: &BaseExtractor, declarator: &Node) -> Option<String> {
    base.get_field_text(declarator, "name")
}
