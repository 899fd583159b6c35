mod batch;
mod copy;
mod error;
mod report;


pub use batch::{Batch, Grouper};
pub use copy::{copy_file_contents, ensure_group_dir};
pub use error::CopyError;
pub use report::{BatchReport, CopyOutcome, FileOutcome};

use std::path::{Path, PathBuf};

/// Default maximum number of files per `group_<N>` folder
pub const DEFAULT_GROUP_SIZE: usize = 128;

/// Default cap on the number of files handled in one run
pub const DEFAULT_MAX_FILES: usize = 1000;

/// Copies matches into `group_<N>` folders under a destination root
///
/// Failures never stop the copier: a file that can't be copied is recorded
/// and skipped, a group folder that can't be created skips that batch only.
pub struct GroupedCopier {
    destination: PathBuf,
    grouper: Grouper,
    dry_run: bool,
}

impl GroupedCopier {
    pub fn new(destination: impl Into<PathBuf>, grouper: Grouper) -> Self {
        Self {
            destination: destination.into(),
            grouper,
            dry_run: false,
        }
    }

    /// Only report what would be copied
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Copy every batch the grouper yields, in order
    pub fn copy_all(&self, matches: &[PathBuf]) -> Vec<BatchReport> {
        self.grouper
            .split(matches)
            .map(|batch| self.copy_batch(&batch))
            .collect()
    }

    /// Flush one batch into its group folder
    pub fn copy_batch(&self, batch: &Batch<'_>) -> BatchReport {
        let group_dir = self.destination.join(batch.dir_name());
        let mut report = BatchReport::new(batch.index, group_dir.clone(), batch.len());

        tracing::info!(
            group = batch.index,
            files = batch.len(),
            "Copying {} files to {}",
            batch.len(),
            group_dir.display()
        );

        if !self.dry_run {
            if let Err(e) = ensure_group_dir(&group_dir) {
                tracing::warn!(
                    group = batch.index,
                    "Could not prepare the group {} folder, skipping it - {}",
                    batch.index,
                    e
                );
                report.error = Some(e.to_string());
                return report;
            }
        }

        for source in batch.paths {
            report.outcomes.push(self.copy_one(source, &group_dir));
        }

        report
    }

    fn copy_one(&self, source: &Path, group_dir: &Path) -> FileOutcome {
        // Sources come from a walk so they always carry a file name
        let destination = match source.file_name() {
            Some(name) => group_dir.join(name),
            None => group_dir.to_path_buf(),
        };

        tracing::debug!(
            source = %source.display(),
            destination = %destination.display(),
            "Copying file"
        );

        if self.dry_run {
            tracing::info!(
                "Copying {} to {} (dry run)",
                source.display(),
                destination.display()
            );
            return FileOutcome::new(source, destination, CopyOutcome::Planned);
        }

        let outcome = match copy_file_contents(source, &destination) {
            Ok(bytes) => CopyOutcome::Copied { bytes },
            Err(e) => {
                tracing::warn!(
                    "Failed to copy {} to {}, continuing anyway - {}",
                    source.display(),
                    destination.display(),
                    e
                );
                CopyOutcome::Failed {
                    error: e.to_string(),
                }
            }
        };
        FileOutcome::new(source, destination, outcome)
    }
}
