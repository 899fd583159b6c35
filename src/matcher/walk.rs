use super::{DiscoveryError, Matcher};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Regular files, or symlinks that resolve to one; linked dirs are not walked
fn is_sample_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}

/// Recursively collect every sample under `root` accepted by `matcher`
///
/// Paths come back absolute, in walk order (file-name order within each
/// directory). Any traversal error aborts the whole discovery.
pub fn find_matching_files(
    root: &Path,
    matcher: &Matcher,
) -> Result<Vec<PathBuf>, DiscoveryError> {
    let full_path = std::path::absolute(root).map_err(|source| DiscoveryError::Resolve {
        path: root.to_path_buf(),
        source,
    })?;

    // A missing root surfaces as a walk error on the first entry
    if full_path.exists() && !full_path.is_dir() {
        return Err(DiscoveryError::NotADirectory(full_path));
    }

    tracing::debug!(
        root = %full_path.display(),
        keyword = matcher.keyword(),
        "Searching for samples"
    );

    let mut matches = Vec::new();
    for entry in WalkDir::new(&full_path)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| DiscoveryError::Walk {
            root: full_path.clone(),
            source,
        })?;

        if !is_sample_file(&entry) {
            continue;
        }

        if matcher.matches_path(entry.path()) {
            tracing::debug!(path = %entry.path().display(), "match found");
            matches.push(entry.into_path());
        }
    }

    Ok(matches)
}
