// C# Grouping Call Extraction
//
// Matches `this.<group>.<collectionMember>.<groupingMethod>(...)` invocations and
// collects every `this.<member>` reference anywhere in the call. The call target
// itself contributes `this.<group>`, so a section pairs with itself.

use super::helpers;
use crate::config::PatternConfig;
use crate::extractors::base::{BaseExtractor, GroupMembership};
use std::collections::HashSet;
use tree_sitter::Node;

/// Members referenced by one invocation in source order, the group first (duplicates kept).
pub fn extract_group_members(
    base: &BaseExtractor,
    node: Node,
    patterns: &PatternConfig,
) -> Option<Vec<GroupMembership>> {
    let function = node.child_by_field_name("function")?;
    let path = helpers::self_member_path(base, &function)?;
    let [group, collection, method] = path.as_slice() else {
        return None;
    };
    if *collection != patterns.collection_member || *method != patterns.grouping_method {
        return None;
    }

    let mut members = Vec::new();
    // Covers the call target, direct arguments and array initializers alike:
    // this.grp.Controls.AddRange(new Control[] { this.a, this.b })
    base.walk_tree(&node, &mut |n| {
        if let Some(member) = helpers::self_member_name(base, n) {
            members.push(GroupMembership {
                group: group.clone(),
                member,
            });
        }
    });

    Some(members)
}

/// Drop repeated (group, member) pairs, keeping the first occurrence's position.
pub fn dedup_memberships(memberships: Vec<GroupMembership>) -> Vec<GroupMembership> {
    let mut seen = HashSet::new();
    memberships
        .into_iter()
        .filter(|m| seen.insert(m.clone()))
        .collect()
}
