// src/engine/parallel.rs
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{info, debug, error};

use super::failure::{classify, TaskFailure};
use super::runner::TaskRunner;
use super::task::{AnalysisResult, TaskDefinition, TaskStatus};
use super::workload::Workload;

/// Executor for analyzing every task in parallel
#[derive(Clone)]
pub struct ParallelExecutor {
    runner: TaskRunner,
}

impl ParallelExecutor {
    /// Create a new parallel executor around a workload
    pub fn new(workload: Arc<dyn Workload>) -> Self {
        Self {
            runner: TaskRunner::new(workload),
        }
    }

    /// Execute a list of tasks, one spawned unit per task.
    ///
    /// Returns once every unit has finished. `results[i]` always belongs to
    /// `tasks[i]`, whatever order the units complete in.
    pub async fn execute_tasks(&self, tasks: Vec<TaskDefinition>, cancel: CancellationToken) -> Vec<AnalysisResult> {
        if tasks.is_empty() {
            info!("No tasks to execute");
            return Vec::new();
        }

        info!("Executing {} tasks", tasks.len());

        let (tx, mut rx) = mpsc::channel(tasks.len());
        let mut handles = Vec::with_capacity(tasks.len());

        for (index, task) in tasks.iter().enumerate() {
            let task_clone = task.clone();
            let tx_clone = tx.clone();
            let runner_clone = self.runner.clone();
            let cancel_clone = cancel.clone();

            let handle = tokio::spawn(async move {
                let result = runner_clone.run(index, &task_clone, &cancel_clone).await;
                if tx_clone.send((index, result)).await.is_err() {
                    error!("Result channel closed before task {} reported", task_clone.id);
                }
            });

            handles.push(handle);
        }

        // Collect results
        drop(tx);
        let mut slots: Vec<Option<AnalysisResult>> = vec![None; tasks.len()];
        while let Some((index, result)) = rx.recv().await {
            slots[index] = Some(result);
        }

        // A unit that died without reporting still gets a result
        for (index, handle) in handles.into_iter().enumerate() {
            let join_error = handle.await.err();
            if slots[index].is_some() {
                continue;
            }

            let raw = match join_error {
                Some(e) => e.to_string(),
                None => "task finished without reporting a result".to_string(),
            };
            error!("Task {} did not complete: {}", tasks[index].id, raw);

            let (message, details) = classify(&TaskFailure::Unclassified(raw));
            slots[index] = Some(AnalysisResult::failure(&tasks[index], message, details));
        }

        let results: Vec<AnalysisResult> = slots.into_iter().flatten().collect();

        let failed = results.iter().filter(|r| r.status() == TaskStatus::Failed).count();
        debug!("{} of {} tasks failed", failed, results.len());
        info!("Completed all {} tasks", results.len());

        results
    }
}
