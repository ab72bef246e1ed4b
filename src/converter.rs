use crate::models::{
    FileEntry, Issue, IssueReport, IssueType, PmdReport, PrimaryLocation, Severity, TextRange,
    Violation,
};
use crate::output::format_json_report;
use crate::parsers::parse_pmd_report_file;
use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const ENGINE_ID: &str = "pmd";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub issues: usize,
    pub output: PathBuf,
}

impl fmt::Display for ConversionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Converted {} issues to JSON and saved to {}",
            self.issues,
            self.output.display()
        )
    }
}

pub fn to_issue(file: &FileEntry, v: &Violation) -> Issue {
    Issue {
        engine_id: ENGINE_ID.to_string(),
        rule_id: v.rule_id.clone(),
        primary_location: PrimaryLocation {
            message: v.message.clone(),
            file_path: file.path.clone(),
            text_range: TextRange {
                start_line: v.begin_line,
                end_line: v.end_line,
            },
        },
        issue_type: IssueType::CodeSmell,
        severity: Severity::from_priority(v.priority.as_deref()),
    }
}

pub fn to_issue_report(report: &PmdReport) -> IssueReport {
    let issues = report
        .files
        .iter()
        .flat_map(|file| file.violations.iter().map(move |v| to_issue(file, v)))
        .collect();
    IssueReport { issues }
}

/// Reads a PMD XML report and writes the equivalent Sonar issue JSON,
/// replacing `output` if it exists.
pub fn convert(input: &Path, output: &Path) -> Result<ConversionSummary> {
    info!(input = %input.display(), "reading PMD report");
    let report = parse_pmd_report_file(input)?;
    debug!(
        files = report.files.len(),
        violations = report.violation_count(),
        "parsed PMD report"
    );
    let issues = to_issue_report(&report);

    // render fully before touching the output file
    let json = format_json_report(&issues).context("failed to serialize issues")?;
    fs::write(output, json)
        .with_context(|| format!("failed to write output: {}", output.display()))?;
    info!(output = %output.display(), issues = issues.issues.len(), "wrote issue report");

    Ok(ConversionSummary {
        issues: issues.issues.len(),
        output: output.to_path_buf(),
    })
}
