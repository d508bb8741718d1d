// src/engine/runner.rs
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::failure::{classify, TaskFailure};
use super::probe::probe_accessibility;
use super::task::{AnalysisResult, TaskDefinition};
use super::workload::Workload;

/// Turns one task definition into its analysis result
#[derive(Clone)]
pub struct TaskRunner {
    workload: Arc<dyn Workload>,
}

impl TaskRunner {
    pub fn new(workload: Arc<dyn Workload>) -> Self {
        Self { workload }
    }

    /// Probe the file, run the workload, and report the outcome.
    ///
    /// A failed probe skips the workload entirely. Nothing is retried.
    pub async fn run(&self, index: usize, task: &TaskDefinition, cancel: &CancellationToken) -> AnalysisResult {
        debug!("Running task {} ({})", task.id, task.path);

        if let Err(e) = probe_accessibility(&task.path).await {
            return Self::failed(task, &TaskFailure::from(e));
        }

        match self.workload.run(index, cancel).await {
            Ok(()) => AnalysisResult::success(task),
            Err(e) => Self::failed(task, &e),
        }
    }

    fn failed(task: &TaskDefinition, failure: &TaskFailure) -> AnalysisResult {
        debug!("Task {} failed: {}", task.id, failure);
        let (message, details) = classify(failure);
        AnalysisResult::failure(task, message, details)
    }
}
