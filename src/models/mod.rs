pub mod pmd;
pub mod severity;
pub mod sonar;

pub use pmd::{FileEntry, PmdReport, Violation};
pub use severity::Severity;
pub use sonar::{Issue, IssueReport, IssueType, PrimaryLocation, TextRange};
