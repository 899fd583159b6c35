use crate::config::Config;
use crate::copier::{BatchReport, GroupedCopier};
use crate::matcher::{find_matching_files, DiscoveryError};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Everything a run did, for the final summary and `--report`
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub source: PathBuf,
    pub destination: PathBuf,
    pub keyword: String,
    pub dry_run: bool,
    /// Files found by discovery
    pub matched: usize,
    /// Files handed to the copier after the max cap
    pub considered: usize,
    pub max_files: usize,
    pub group_size: usize,
    pub batches: Vec<BatchReport>,
}

impl RunReport {
    pub fn hit_max(&self) -> bool {
        self.matched > self.max_files
    }

    pub fn copied(&self) -> usize {
        self.batches.iter().map(BatchReport::copied).sum()
    }

    pub fn planned(&self) -> usize {
        self.batches.iter().map(BatchReport::planned).sum()
    }

    /// Per-file failures plus files skipped because their group folder failed
    pub fn failed(&self) -> usize {
        self.batches.iter().map(BatchReport::failed).sum()
    }

    pub fn bytes(&self) -> u64 {
        self.batches.iter().map(BatchReport::bytes).sum()
    }

    /// Write the report as pretty-printed JSON
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize run report")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write run report to {}", path.display()))?;
        Ok(())
    }
}

/// Discover matches under the configured source, then copy them in groups
///
/// Only discovery can fail the run. Copy problems are recorded per file and
/// per batch in the returned report.
pub fn run(config: &Config) -> Result<RunReport, DiscoveryError> {
    let started_at = Utc::now();

    let matches = find_matching_files(config.source(), &config.matcher())?;
    tracing::info!(count = matches.len(), "Found {} matching files to copy", matches.len());

    let grouper = config.grouper();
    let considered = grouper.considered(matches.len());
    if considered < matches.len() {
        tracing::info!(
            max = config.max_files(),
            "We reached the max amount of samples to copy: {}",
            config.max_files()
        );
    }

    let copier = GroupedCopier::new(config.destination(), grouper).dry_run(config.dry_run());
    let batches = copier.copy_all(&matches);

    Ok(RunReport {
        started_at,
        finished_at: Utc::now(),
        source: config.source().to_path_buf(),
        destination: config.destination().to_path_buf(),
        keyword: config.keyword().to_string(),
        dry_run: config.dry_run(),
        matched: matches.len(),
        considered,
        max_files: config.max_files(),
        group_size: config.group_size().get(),
        batches,
    })
}
