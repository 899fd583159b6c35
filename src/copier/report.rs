use serde::Serialize;
use std::path::{Path, PathBuf};

/// What happened to a single file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CopyOutcome {
    Copied { bytes: u64 },
    /// Dry run: the copy was only reported
    Planned,
    Failed { error: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    pub source: PathBuf,
    pub destination: PathBuf,
    #[serde(flatten)]
    pub outcome: CopyOutcome,
}

impl FileOutcome {
    pub fn new(source: &Path, destination: PathBuf, outcome: CopyOutcome) -> Self {
        Self {
            source: source.to_path_buf(),
            destination,
            outcome,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, CopyOutcome::Failed { .. })
    }
}

/// Result of flushing one batch into its group folder
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub index: usize,
    pub directory: PathBuf,
    /// Number of files assigned to this batch
    pub files: usize,
    pub outcomes: Vec<FileOutcome>,
    /// Set when the group folder itself couldn't be created
    pub error: Option<String>,
}

impl BatchReport {
    pub fn new(index: usize, directory: PathBuf, files: usize) -> Self {
        Self {
            index,
            directory,
            files,
            outcomes: Vec::new(),
            error: None,
        }
    }

    pub fn copied(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.outcome, CopyOutcome::Copied { .. }))
            .count()
    }

    pub fn planned(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.outcome == CopyOutcome::Planned)
            .count()
    }

    /// Failed files; every file counts when the group folder failed
    pub fn failed(&self) -> usize {
        match self.error {
            Some(_) => self.files,
            None => self.outcomes.iter().filter(|o| o.is_failure()).count(),
        }
    }

    pub fn bytes(&self) -> u64 {
        self.outcomes
            .iter()
            .map(|o| match o.outcome {
                CopyOutcome::Copied { bytes } => bytes,
                _ => 0,
            })
            .sum()
    }
}
