// C# Label Assignment Extraction
//
// Matches `this.<owner>.<labelMember> = "<literal>";` statements.

use super::helpers;
use crate::extractors::base::{BaseExtractor, LabelAssignment};
use tree_sitter::Node;

/// Match one assignment expression; anything else in the designer file is ignored.
pub fn extract_label_assignment(
    base: &BaseExtractor,
    node: Node,
    label_member: &str,
) -> Option<LabelAssignment> {
    // Only whole statements, not assignments nested in other expressions
    if node.parent()?.kind() != "expression_statement" {
        return None;
    }
    if helpers::assignment_operator(base, &node)? != "=" {
        return None;
    }

    let left = node.child_by_field_name("left")?;
    let path = helpers::self_member_path(base, &left)?;
    let [owner, member] = path.as_slice() else {
        return None;
    };
    if member != label_member {
        return None;
    }

    let right = node.child_by_field_name("right")?;
    let label = helpers::string_literal_content(base, &right)?;

    Some(LabelAssignment {
        owner: owner.clone(),
        label,
    })
}
