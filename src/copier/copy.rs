use super::CopyError;
use std::fs::{self, File};
use std::io;
use std::path::Path;

/// Create `dir` and any missing parents with permissive mode
pub fn ensure_group_dir(dir: &Path) -> Result<(), CopyError> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o777);
    }

    builder.create(dir).map_err(|source| CopyError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Stream the whole of `src` into `dst`, overwriting it, and sync to disk
///
/// Both handles are dropped on every return path. Returns bytes copied.
pub fn copy_file_contents(src: &Path, dst: &Path) -> Result<u64, CopyError> {
    let mut input = File::open(src).map_err(|source| CopyError::Open {
        path: src.to_path_buf(),
        source,
    })?;

    let mut output = File::create(dst).map_err(|source| CopyError::Create {
        path: dst.to_path_buf(),
        source,
    })?;

    let bytes = io::copy(&mut input, &mut output).map_err(|source| CopyError::Stream {
        from: src.to_path_buf(),
        to: dst.to_path_buf(),
        source,
    })?;

    output.sync_all().map_err(|source| CopyError::Sync {
        path: dst.to_path_buf(),
        source,
    })?;

    Ok(bytes)
}
