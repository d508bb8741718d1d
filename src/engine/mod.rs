mod parallel;
mod probe;
mod runner;
mod task;
mod workload;
pub mod failure;

pub use failure::{classify, AccessErrorKind, AccessFailure, TaskFailure};
pub use parallel::ParallelExecutor;
pub use probe::probe_accessibility;
pub use runner::TaskRunner;
pub use task::{filter_by_status, AnalysisResult, TaskDefinition, TaskStatus, SUCCESS_MESSAGE};
pub use workload::{SimulatedWorkload, Workload};
