// src/engine/workload.rs
use std::ops::RangeInclusive;
use std::time::Duration;
use async_trait::async_trait;
use rand::Rng;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::failure::TaskFailure;

pub const DEFAULT_MIN_DELAY_MS: u64 = 50;
pub const DEFAULT_MAX_DELAY_MS: u64 = 200;

/// The analysis performed on a log file once it is known to be readable
#[async_trait]
pub trait Workload: Send + Sync {
    /// Run the workload for the task at position `seed`.
    ///
    /// Implementations must return [`TaskFailure::Cancelled`] promptly once
    /// `cancel` fires.
    async fn run(&self, seed: usize, cancel: &CancellationToken) -> Result<(), TaskFailure>;
}

/// Placeholder analysis: waits a random delay, or until cancelled
#[derive(Debug, Clone)]
pub struct SimulatedWorkload {
    delay_ms: RangeInclusive<u64>,
}

impl SimulatedWorkload {
    pub fn new(min_delay_ms: u64, max_delay_ms: u64) -> Self {
        let (low, high) = if min_delay_ms <= max_delay_ms {
            (min_delay_ms, max_delay_ms)
        } else {
            (max_delay_ms, min_delay_ms)
        };
        Self { delay_ms: low..=high }
    }

    pub fn delay_range(&self) -> RangeInclusive<Duration> {
        Duration::from_millis(*self.delay_ms.start())..=Duration::from_millis(*self.delay_ms.end())
    }

    /// Draw a delay inside the configured bounds
    pub fn random_delay(&self) -> Duration {
        Duration::from_millis(rand::thread_rng().gen_range(self.delay_ms.clone()))
    }
}

impl Default for SimulatedWorkload {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_DELAY_MS, DEFAULT_MAX_DELAY_MS)
    }
}

#[async_trait]
impl Workload for SimulatedWorkload {
    async fn run(&self, seed: usize, cancel: &CancellationToken) -> Result<(), TaskFailure> {
        let delay = self.random_delay();
        debug!("Task #{} simulating work for {:?}", seed, delay);

        tokio::select! {
            // Cancellation wins when both are ready
            biased;
            _ = cancel.cancelled() => Err(TaskFailure::cancelled()),
            _ = tokio::time::sleep(delay) => Ok(()),
        }
    }
}
