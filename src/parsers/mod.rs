pub mod pmd;

pub use pmd::parse_pmd_report_file;
