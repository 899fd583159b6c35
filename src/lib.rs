// Public API exports
pub mod cli;
pub mod config;
pub mod copier;
pub mod logging;
pub mod matcher;
pub mod pipeline;

// Re-export main types for convenience
pub use cli::Cli;
pub use config::{Config, ConfigBuilder, ConfigError, expand_home};

pub use matcher::{DiscoveryError, Matcher, SAMPLE_EXTENSIONS, find_matching_files};

pub use copier::{
    Batch, BatchReport, CopyError, CopyOutcome, DEFAULT_GROUP_SIZE, DEFAULT_MAX_FILES,
    FileOutcome, GroupedCopier, Grouper, copy_file_contents,
};

pub use pipeline::{RunReport, run};
