// Base Extractor Types
//
// Everything one designer file yields before correlation. These live only for
// the duration of processing a single file.

use std::collections::HashMap;

/// A declared field and the type text written at its declaration site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInfo {
    pub name: String,
    /// Exactly as written, e.g. `System.Windows.Forms.Label`
    pub declared_type: String,
}

/// `this.<owner>.ClassName = "<label>"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelAssignment {
    pub owner: String,
    pub label: String,
}

/// `this.<group>.Controls.AddRange(... this.<member> ...)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupMembership {
    pub group: String,
    pub member: String,
}

/// Name-keyed lookup with last-write-wins semantics.
///
/// Designer files declare each field and assign each label once; when a name
/// does repeat, the later occurrence replaces the earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LastWriteMap {
    entries: HashMap<String, String>,
}

impl LastWriteMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` under `key`, returning the value it replaced.
    pub fn insert_or_replace(&mut self, key: String, value: String) -> Option<String> {
        self.entries.insert(key, value)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Field name → declared type text
pub type FieldMap = LastWriteMap;

/// Owner name → label literal
pub type LabelMap = LastWriteMap;

/// Combined extraction results for one source file
#[derive(Debug, Clone, Default)]
pub struct ExtractionResults {
    pub fields: FieldMap,
    pub labels: LabelMap,
    /// Distinct (group, member) pairs in first-seen source order
    pub groupings: Vec<GroupMembership>,
    /// The tree contained ERROR or MISSING nodes
    pub has_syntax_errors: bool,
}
