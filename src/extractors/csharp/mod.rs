// C# Designer Extractor
//
// Reads the three statement shapes a WinForms-style designer file uses to wire
// up report controls:
// - Field declarations (`private System.Windows.Forms.Label lblName;`)
// - Label assignments (`this.lblName.ClassName = "Customer Name";`)
// - Grouping calls (`this.grpHeader.Controls.AddRange(new Control[] { this.lblName });`)

mod assignments;
mod fields;
mod groupings;
mod helpers;

use crate::config::PatternConfig;
use crate::extractors::base::{
    BaseExtractor, ExtractionResults, FieldMap, GroupMembership, LabelMap,
};
use tracing::debug;
use tree_sitter::{Node, Tree};

/// Syntax node variants the designer extractors consume
#[derive(Debug, Clone, Copy)]
enum DesignerNode<'a> {
    FieldDeclaration(Node<'a>),
    Assignment(Node<'a>),
    Invocation(Node<'a>),
}

impl<'a> DesignerNode<'a> {
    fn classify(node: Node<'a>) -> Option<Self> {
        match node.kind() {
            "field_declaration" => Some(Self::FieldDeclaration(node)),
            "assignment_expression" => Some(Self::Assignment(node)),
            "invocation_expression" => Some(Self::Invocation(node)),
            _ => None,
        }
    }
}

/// C# extractor using tree-sitter-c-sharp parser
pub struct CSharpExtractor {
    base: BaseExtractor,
    patterns: PatternConfig,
}

impl CSharpExtractor {
    pub fn new(
        language: String,
        file_path: String,
        content: String,
        patterns: &PatternConfig,
    ) -> Self {
        Self {
            base: BaseExtractor::new(language, file_path, content),
            patterns: patterns.clone(),
        }
    }

    /// Visit every designer node in source order
    fn for_each_designer_node<'a, F>(&self, tree: &'a Tree, mut visit: F)
    where
        F: FnMut(DesignerNode<'a>),
    {
        self.base.walk_tree(&tree.root_node(), &mut |node| {
            if let Some(designer_node) = DesignerNode::classify(*node) {
                visit(designer_node);
            }
        });
    }

    /// Field name → declared type text
    pub fn extract_fields(&self, tree: &Tree) -> FieldMap {
        let mut field_map = FieldMap::new();
        self.for_each_designer_node(tree, |node| {
            if let DesignerNode::FieldDeclaration(decl) = node {
                for info in fields::extract_field(&self.base, decl) {
                    field_map.insert_or_replace(info.name, info.declared_type);
                }
            }
        });
        field_map
    }

    /// Owner name → label literal
    pub fn extract_labels(&self, tree: &Tree) -> LabelMap {
        let mut labels = LabelMap::new();
        self.for_each_designer_node(tree, |node| {
            if let DesignerNode::Assignment(assignment) = node {
                if let Some(found) = assignments::extract_label_assignment(
                    &self.base,
                    assignment,
                    &self.patterns.label_member,
                ) {
                    labels.insert_or_replace(found.owner, found.label);
                }
            }
        });
        labels
    }

    /// Distinct (group, member) pairs in source order
    pub fn extract_groupings(&self, tree: &Tree) -> Vec<GroupMembership> {
        let mut memberships = Vec::new();
        self.for_each_designer_node(tree, |node| {
            if let DesignerNode::Invocation(call) = node {
                if let Some(members) =
                    groupings::extract_group_members(&self.base, call, &self.patterns)
                {
                    memberships.extend(members);
                }
            }
        });
        groupings::dedup_memberships(memberships)
    }

    pub fn extract_all(&self, tree: &Tree) -> ExtractionResults {
        let results = ExtractionResults {
            fields: self.extract_fields(tree),
            labels: self.extract_labels(tree),
            groupings: self.extract_groupings(tree),
            has_syntax_errors: self.base.has_error(&tree.root_node()),
        };

        debug!(
            "Extracted {} fields, {} labels, {} group memberships from {} file: {}",
            results.fields.len(),
            results.labels.len(),
            results.groupings.len(),
            self.base.language,
            self.base.file_path
        );
        results
    }
}
