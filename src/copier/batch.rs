use std::num::NonZeroUsize;
use std::path::PathBuf;

/// A run of consecutive matches bound for one `group_<index>` folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch<'a> {
    /// 1-based group number
    pub index: usize,
    pub paths: &'a [PathBuf],
}

impl Batch<'_> {
    /// Name of the subfolder this batch lands in
    pub fn dir_name(&self) -> String {
        format!("group_{}", self.index)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Splits a match list into capped groups
#[derive(Debug, Clone, Copy)]
pub struct Grouper {
    pub group_size: NonZeroUsize,
    pub max_files: usize,
}

impl Grouper {
    pub fn new(group_size: NonZeroUsize, max_files: usize) -> Self {
        Self {
            group_size,
            max_files,
        }
    }

    /// How many of `total` matches will be considered at all
    pub fn considered(&self, total: usize) -> usize {
        total.min(self.max_files)
    }

    /// Yield batches in discovery order; nothing past `max_files` is included
    pub fn split<'a>(&self, items: &'a [PathBuf]) -> impl Iterator<Item = Batch<'a>> + 'a {
        items[..self.considered(items.len())]
            .chunks(self.group_size.get())
            .enumerate()
            .map(|(i, paths)| Batch {
                index: i + 1,
                paths,
            })
    }
}
