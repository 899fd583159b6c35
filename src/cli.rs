use crate::config::{Config, ConfigBuilder, ConfigError};
use crate::copier::{DEFAULT_GROUP_SIZE, DEFAULT_MAX_FILES};
use clap::Parser;
use std::path::PathBuf;

/// Find samples whose name contains a keyword and copy them into
/// `group_<N>` folders of at most `--per-folder` files each.
#[derive(Parser, Debug)]
#[command(name = "sample-grouper", version, about)]
pub struct Cli {
    /// Path to look for samples
    #[arg(long, default_value = "")]
    pub src: String,

    /// Keyword to look for in sample file names
    #[arg(long, default_value = "")]
    pub keyword: String,

    /// Where to put the grouped samples (defaults to your home folder)
    #[arg(long, default_value = "")]
    pub dest: String,

    /// Maximum number of samples per destination sub folder
    #[arg(long = "per-folder", default_value_t = DEFAULT_GROUP_SIZE)]
    pub per_folder: usize,

    /// Dry run: report what would be copied without copying
    #[arg(long)]
    pub dry: bool,

    /// Enable debugging logs
    #[arg(long)]
    pub debug: bool,

    /// Maximum number of samples to copy in this run
    #[arg(long, default_value_t = DEFAULT_MAX_FILES)]
    pub max: usize,

    /// Write a JSON report of every copy to this path
    #[arg(long)]
    pub report: Option<PathBuf>,
}

impl Cli {
    /// Validate flags into a [`Config`], expanding `~/` against `home`
    pub fn into_config(self, home: Option<PathBuf>) -> Result<Config, ConfigError> {
        ConfigBuilder::new()
            .source(self.src)
            .keyword(self.keyword)
            .destination(self.dest)
            .home(home)
            .group_size(self.per_folder)
            .max_files(self.max)
            .dry_run(self.dry)
            .debug(self.debug)
            .build()
    }
}
