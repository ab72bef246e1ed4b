use serde::{Deserialize, Serialize};

use crate::models::Severity;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueType {
    CodeSmell,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TextRange {
    pub start_line: i64,
    pub end_line: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryLocation {
    pub message: String,
    /// Written as `null` when the report entry has no file name.
    pub file_path: Option<String>,
    pub text_range: TextRange,
}

/// One entry of Sonar's generic issue import format.
///
/// Field order is the order keys appear in the written JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub engine_id: String,
    pub rule_id: String,
    pub primary_location: PrimaryLocation,
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub severity: Severity,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct IssueReport {
    pub issues: Vec<Issue>,
}
