use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::config::{load_tasks, Settings};
use crate::engine::{filter_by_status, ParallelExecutor, TaskStatus};
use crate::error::AnalyzerError;
use crate::reporting::{timestamped_path, JsonReportExporter, ReportExporter};

#[derive(Parser)]
#[command(name = "loganalyzer")]
#[command(about = "Analyze log files listed in a JSON configuration, in parallel")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Path to a settings file (TOML)")]
    pub settings: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze the log files listed in a JSON configuration file
    Analyze {
        #[arg(short, long, help = "Path to the JSON configuration file")]
        config: PathBuf,

        #[arg(short, long, help = "Path of the JSON report to write")]
        output: Option<PathBuf>,

        #[arg(long, value_parser = parse_status, help = "Only show results with this status (OK or FAILED)")]
        status: Option<TaskStatus>,
    },
}

fn parse_status(value: &str) -> std::result::Result<TaskStatus, String> {
    value.parse::<TaskStatus>().map_err(|e| e.to_string())
}

pub async fn execute_command<W: Write>(
    command: &Commands,
    settings: &Settings,
    cancel: CancellationToken,
    out: &mut W,
) -> Result<()> {
    match command {
        Commands::Analyze { config, output, status } => {
            handle_analyze_command(config, output.as_deref(), *status, settings, cancel, out).await
        },
    }
}

/// Headline for a failed command, separating task list problems from the rest
pub fn failure_headline(err: &anyhow::Error) -> &'static str {
    let is_config = err
        .chain()
        .filter_map(|cause| cause.downcast_ref::<AnalyzerError>())
        .any(AnalyzerError::is_config_error);

    if is_config {
        "Invalid task configuration"
    } else {
        "Command execution failed"
    }
}

async fn handle_analyze_command<W: Write>(
    config: &Path,
    output: Option<&Path>,
    status: Option<TaskStatus>,
    settings: &Settings,
    cancel: CancellationToken,
    out: &mut W,
) -> Result<()> {
    let tasks = load_tasks(config).context("Failed to load configuration")?;
    info!("Loaded {} tasks from {}", tasks.len(), config.display());

    let executor = ParallelExecutor::new(Arc::new(settings.workload.build()));
    let results = executor.execute_tasks(tasks, cancel).await;

    let filtered = filter_by_status(results, status);
    for result in &filtered {
        writeln!(out, "{}", result)?;
    }

    if let Some(status) = status {
        if filtered.is_empty() {
            writeln!(out, "No results with status {}", status)?;
        }
    }

    if let Some(output) = output {
        let target = timestamped_path(output, &Local::now(), &settings.report.timestamp_format)?;
        JsonReportExporter::new()
            .export(&filtered, &target)
            .await
            .context(format!("Failed to export report to {}", target.display()))?;
        writeln!(out, "Report exported to {}", target.display())?;
    }

    Ok(())
}
