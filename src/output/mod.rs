// Tue Aug 25 2026 - Alex

pub mod json;
pub mod report;

pub use json::write_json;
pub use report::ReportRenderer;
