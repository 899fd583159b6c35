use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("You need to pass a source path to search: --src <path where to search>")]
    MissingSource,

    #[error("You need to pass a keyword to search for: --keyword <keyword>")]
    MissingKeyword,

    #[error("The number of samples per folder must be at least 1")]
    ZeroGroupSize,

    #[error("Failed to get the user home directory")]
    NoHomeDir,
}
