/// A single PMD finding, with attribute defaults already applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violation {
    pub begin_line: i64,
    pub end_line: i64,
    pub rule_id: String,
    /// Raw `priority` attribute; interpreted by [`crate::models::Severity::from_priority`].
    pub priority: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileEntry {
    /// `name` attribute; `None` when the element has none.
    pub path: Option<String>,
    pub violations: Vec<Violation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PmdReport {
    pub files: Vec<FileEntry>,
}

impl PmdReport {
    pub fn violation_count(&self) -> usize {
        self.files.iter().map(|f| f.violations.len()).sum()
    }
}
