// Base Extractor Types and Helpers
//
// Shared by every extractor that reads designer sources:
// - types.rs: Extraction result types (FieldInfo, LabelAssignment, GroupMembership)
// - extractor.rs: BaseExtractor (file context + node text access)
// - tree_methods.rs: Tree navigation and traversal methods

pub mod extractor;
pub mod tree_methods;
pub mod types;

// Re-export key types for external use
pub use extractor::BaseExtractor;
pub use types::{ExtractionResults, FieldInfo, FieldMap, GroupMembership, LabelAssignment, LabelMap};
