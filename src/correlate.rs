//! Correlator - joins one file's extraction results into control records
//!
//! Grouping calls drive the output: every distinct (group, member) pair, in
//! source order, becomes a record when the member carries a label. Members
//! without a label are not reported; members without a field declaration are
//! reported with an empty type.

use crate::extractors::ExtractionResults;

/// One reported control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlRecord {
    pub section: String,
    pub name: String,
    /// Short type name (`Label` for `System.Windows.Forms.Label`)
    pub control_type: String,
    pub class_name: String,
}

/// Last segment of a dotted type path; the whole text when there is no dot.
pub fn short_type_name(declared_type: &str) -> &str {
    declared_type.rsplit('.').next().unwrap_or(declared_type)
}

pub fn correlate(results: &ExtractionResults) -> Vec<ControlRecord> {
    results
        .groupings
        .iter()
        .filter_map(|membership| {
            let label = results.labels.get(&membership.member)?;
            let declared_type = results.fields.get(&membership.member).unwrap_or_default();
            Some(ControlRecord {
                section: membership.group.clone(),
                name: membership.member.clone(),
                control_type: short_type_name(declared_type).to_string(),
                class_name: label.to_string(),
            })
        })
        .collect()
}
