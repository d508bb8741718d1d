use serde::{Serialize, Deserialize};

use crate::engine::SimulatedWorkload;

/// Main settings structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub workload: WorkloadSettings,
    pub report: ReportSettings,
}

/// Bounds of the simulated analysis delay
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkloadSettings {
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
}

/// Report export settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportSettings {
    /// chrono format string prefixed to exported report file names
    pub timestamp_format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            workload: WorkloadSettings {
                min_delay_ms: 50,
                max_delay_ms: 200,
            },
            report: ReportSettings {
                timestamp_format: "%y%m%d".to_string(),
            },
        }
    }
}

impl WorkloadSettings {
    pub fn build(&self) -> SimulatedWorkload {
        SimulatedWorkload::new(self.min_delay_ms, self.max_delay_ms)
    }
}
