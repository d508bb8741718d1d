mod json;

pub use json::JsonReportExporter;
