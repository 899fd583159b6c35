mod error;
mod expand;


pub use error::ConfigError;
pub use expand::expand_home;

use crate::copier::{Grouper, DEFAULT_GROUP_SIZE, DEFAULT_MAX_FILES};
use crate::matcher::Matcher;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Validated, immutable run configuration
#[derive(Debug, Clone)]
pub struct Config {
    source: PathBuf,
    destination: PathBuf,
    keyword: String,
    group_size: NonZeroUsize,
    max_files: usize,
    dry_run: bool,
    debug: bool,
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Lower-cased keyword
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn group_size(&self) -> NonZeroUsize {
        self.group_size
    }

    pub fn max_files(&self) -> usize {
        self.max_files
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn matcher(&self) -> Matcher {
        Matcher::new(&self.keyword)
    }

    pub fn grouper(&self) -> Grouper {
        Grouper::new(self.group_size, self.max_files)
    }
}

/// Collects raw inputs, expands `~/`, and validates into a [`Config`]
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    source: Option<String>,
    destination: Option<String>,
    keyword: Option<String>,
    home: Option<PathBuf>,
    group_size: usize,
    max_files: usize,
    dry_run: bool,
    debug: bool,
}

impl ConfigBuilder {
    /// Create a builder with default limits
    pub fn new() -> Self {
        Self {
            source: None,
            destination: None,
            keyword: None,
            home: None,
            group_size: DEFAULT_GROUP_SIZE,
            max_files: DEFAULT_MAX_FILES,
            dry_run: false,
            debug: false,
        }
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Defaults to the home directory when unset or empty
    pub fn destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    /// Home directory used for `~/` expansion and the default destination
    pub fn home(mut self, home: Option<PathBuf>) -> Self {
        self.home = home;
        self
    }

    pub fn group_size(mut self, group_size: usize) -> Self {
        self.group_size = group_size;
        self
    }

    pub fn max_files(mut self, max_files: usize) -> Self {
        self.max_files = max_files;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let source = self
            .source
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingSource)?;
        let keyword = self
            .keyword
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingKeyword)?;
        let group_size =
            NonZeroUsize::new(self.group_size).ok_or(ConfigError::ZeroGroupSize)?;

        let home = self.home.as_deref();
        let source = expand_home(&source, home)?;
        let destination = match self.destination.filter(|d| !d.is_empty()) {
            Some(dest) => expand_home(&dest, home)?,
            None => home.map(Path::to_path_buf).ok_or(ConfigError::NoHomeDir)?,
        };

        Ok(Config {
            source,
            destination,
            keyword: keyword.to_lowercase(),
            group_size,
            max_files: self.max_files,
            dry_run: self.dry_run,
            debug: self.debug,
        })
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
