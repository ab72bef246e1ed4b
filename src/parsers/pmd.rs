use crate::models::pmd::{FileEntry, PmdReport, Violation};
use anyhow::{bail, Context, Result};
use roxmltree::{Document, Node};
use std::fs;
use std::path::Path;
use tracing::debug;

pub const PMD_NAMESPACE: &str = "http://pmd.sourceforge.net/report/2.0.0";

pub fn parse_pmd_report_file(path: &Path) -> Result<PmdReport> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read input: {}", path.display()))?;
    parse_pmd_report(&text)
        .with_context(|| format!("failed to parse PMD report: {}", path.display()))
}

pub fn parse_pmd_report(text: &str) -> Result<PmdReport> {
    let doc = Document::parse(text)?;
    let root = doc.root_element();

    let mut report = PmdReport::default();
    for file in pmd_children(root, "file") {
        let path = file.attribute("name").map(|s| s.to_string());
        let label = path.as_deref().unwrap_or("<unnamed file>");

        let mut violations = Vec::new();
        for node in pmd_children(file, "violation") {
            violations.push(parse_violation(node, label)?);
        }

        debug!(file = %label, violations = violations.len(), "parsed file entry");
        report.files.push(FileEntry { path, violations });
    }

    Ok(report)
}

/// Element children of `node` named `local` in the PMD report namespace.
fn pmd_children<'a, 'input>(
    node: Node<'a, 'input>,
    local: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(move |n| {
        n.is_element()
            && n.tag_name().name() == local
            && n.tag_name().namespace() == Some(PMD_NAMESPACE)
    })
}

fn parse_violation(node: Node, file: &str) -> Result<Violation> {
    let begin_line = match node.attribute("beginline") {
        Some(v) => parse_line(v, "beginline", file)?,
        None => 0,
    };
    let end_line = match node.attribute("endline") {
        Some(v) => parse_line(v, "endline", file)?,
        None => begin_line,
    };

    Ok(Violation {
        begin_line,
        end_line,
        rule_id: node.attribute("rule").unwrap_or("unknown").to_string(),
        priority: node.attribute("priority").map(|s| s.to_string()),
        message: node.text().map(str::trim).unwrap_or_default().to_string(),
    })
}

fn parse_line(value: &str, attr: &str, file: &str) -> Result<i64> {
    match value.trim().parse::<i64>() {
        Ok(n) => Ok(n),
        Err(_) => bail!("invalid {} {:?} on violation in {}", attr, value, file),
    }
}
