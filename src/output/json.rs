use crate::models::IssueReport;
use serde_json::Result;

/// Two-space indented JSON; non-ASCII text is written as-is.
pub fn format_json_report(report: &IssueReport) -> Result<String> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Issue, IssueType, PrimaryLocation, Severity, TextRange};

    #[test]
    fn empty_report_renders_empty_issue_list() {
        let s = format_json_report(&IssueReport::default()).unwrap();
        assert_eq!(s, "{\n  \"issues\": []\n}");
    }

    #[test]
    fn issue_layout_and_key_order() {
        let report = IssueReport {
            issues: vec![Issue {
                engine_id: "pmd".to_string(),
                rule_id: "UnusedVar".to_string(),
                primary_location: PrimaryLocation {
                    message: "변수 x 미사용".to_string(),
                    file_path: Some("A.java".to_string()),
                    text_range: TextRange {
                        start_line: 10,
                        end_line: 12,
                    },
                },
                issue_type: IssueType::CodeSmell,
                severity: Severity::Critical,
            }],
        };

        let expected = r#"{
  "issues": [
    {
      "engineId": "pmd",
      "ruleId": "UnusedVar",
      "primaryLocation": {
        "message": "변수 x 미사용",
        "filePath": "A.java",
        "textRange": {
          "startLine": 10,
          "endLine": 12
        }
      },
      "type": "CODE_SMELL",
      "severity": "CRITICAL"
    }
  ]
}"#;
        assert_eq!(format_json_report(&report).unwrap(), expected);
    }
}
