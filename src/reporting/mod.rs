mod format;
pub mod formats;

pub use format::{timestamped_path, ReportExporter};
pub use formats::JsonReportExporter;
