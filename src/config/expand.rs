use super::ConfigError;
use std::path::{Path, PathBuf};

/// Replace a leading `~/` with `home`
///
/// Pure string substitution, done once at startup. Anything else (including
/// a bare `~` or `~user/`) is returned untouched.
pub fn expand_home(raw: &str, home: Option<&Path>) -> Result<PathBuf, ConfigError> {
    match raw.strip_prefix("~/") {
        Some(rest) => {
            let home = home.ok_or(ConfigError::NoHomeDir)?;
            Ok(home.join(rest))
        }
        None => Ok(PathBuf::from(raw)),
    }
}
