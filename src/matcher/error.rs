use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Couldn't get the absolute path of the source {path}: {source}")]
    Resolve {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Source is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Failed to walk {root}: {source}")]
    Walk {
        root: PathBuf,
        source: walkdir::Error,
    },
}
