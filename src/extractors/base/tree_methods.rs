// Tree navigation methods for BaseExtractor

use super::extractor::BaseExtractor;
use tree_sitter::Node;

impl BaseExtractor {
    /// Walk tree with visitor, pre-order (source order)
    #[allow(clippy::only_used_in_recursion)] // &self used in recursive calls
    pub fn walk_tree<'a, F>(&self, node: &Node<'a>, visitor: &mut F)
    where
        F: FnMut(&Node<'a>),
    {
        visitor(node);

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.walk_tree(&child, visitor);
        }
    }

    /// Find nodes by type, in source order
    pub fn find_nodes_by_type<'a>(&self, node: &Node<'a>, node_type: &str) -> Vec<Node<'a>> {
        let mut nodes = Vec::new();
        self.walk_tree(node, &mut |n| {
            if n.kind() == node_type {
                nodes.push(*n);
            }
        });
        nodes
    }

    /// Find first child by type
    pub fn find_child_by_type<'a>(&self, node: &Node<'a>, child_type: &str) -> Option<Node<'a>> {
        let mut cursor = node.walk();
        let found = node.children(&mut cursor).find(|c| c.kind() == child_type);
        found
    }

    /// Find children by type
    pub fn find_children_by_type<'a>(&self, node: &Node<'a>, child_type: &str) -> Vec<Node<'a>> {
        let mut cursor = node.walk();
        let results = node
            .children(&mut cursor)
            .filter(|c| c.kind() == child_type)
            .collect();
        results
    }

    /// Check if node has error
    pub fn has_error(&self, node: &Node) -> bool {
        node.has_error() || node.kind() == "ERROR"
    }
}
