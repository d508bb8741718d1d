pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod reporting;

// Re-export main types for easier access
pub use config::{load_tasks, Settings};
pub use engine::{
    filter_by_status,
    AnalysisResult,
    ParallelExecutor,
    SimulatedWorkload,
    TaskDefinition,
    TaskFailure,
    TaskStatus,
    Workload,
};
pub use error::{AnalyzerError, AnalyzerResult};
pub use reporting::{JsonReportExporter, ReportExporter};
