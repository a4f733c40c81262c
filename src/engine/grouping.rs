use crate::model::{AggregationType, StatRow};
use serde::{Deserialize, Serialize};

pub const UNKNOWN_GROUP: &str = "Unknown";

/// Normalised grouping key: trimmed and lowercased. Missing or blank values
/// fall into the `unknown` bucket.
pub fn group_key(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_lowercase(),
        _ => UNKNOWN_GROUP.to_lowercase(),
    }
}

/// Display label for a group, keeping the casing of the member it came from.
pub fn group_label(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => UNKNOWN_GROUP.to_string(),
    }
}

pub fn raw_group_value(row: &StatRow, kind: AggregationType) -> Option<&str> {
    match kind {
        AggregationType::Country => row.country_name.as_deref(),
        AggregationType::Team => row.team_key.as_deref(),
    }
}

/// Restricts a dataset to one country or team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupFilter {
    pub kind: AggregationType,
    pub value: String,
}

impl GroupFilter {
    pub fn new(kind: AggregationType, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub fn matches(&self, row: &StatRow) -> bool {
        group_key(raw_group_value(row, self.kind)) == group_key(Some(self.value.as_str()))
    }

    pub fn apply(&self, rows: Vec<StatRow>) -> Vec<StatRow> {
        rows.into_iter().filter(|r| self.matches(r)).collect()
    }
}
