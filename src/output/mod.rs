pub mod json;

pub use json::format_json_report;
