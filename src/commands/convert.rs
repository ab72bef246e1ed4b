use std::path::PathBuf;

use anyhow::Result;

use crate::converter::{self, ConversionSummary};

pub const USAGE: &str = "Usage: pmd2sonar <input_xml> <output_json>";

#[derive(Debug, Clone)]
pub struct ConvertArgs {
    /// PMD XML report to read
    pub input: PathBuf,

    /// Sonar issue JSON to write (overwritten if present)
    pub output: PathBuf,
}

pub fn run(args: ConvertArgs) -> Result<ConversionSummary> {
    let summary = converter::convert(&args.input, &args.output)?;
    println!("{}", summary);
    Ok(summary)
}
