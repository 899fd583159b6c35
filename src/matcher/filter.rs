use std::path::Path;

/// Audio extensions (lower-case, without the dot) that count as samples
pub const SAMPLE_EXTENSIONS: [&str; 3] = ["wav", "aiff", "aif"];

/// Filename predicate: sample extension plus case-insensitive keyword
#[derive(Debug, Clone)]
pub struct Matcher {
    keyword: String,
}

impl Matcher {
    /// Create a matcher; the keyword is folded to lower case once here
    pub fn new(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_lowercase(),
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Test a bare file name (not a full path)
    ///
    /// Plain substring containment, no glob or regex semantics.
    pub fn is_match(&self, file_name: &str) -> bool {
        let file_name = file_name.to_lowercase();
        is_sample(&file_name) && file_name.contains(&self.keyword)
    }

    /// Test the final component of `path`
    pub fn matches_path(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| self.is_match(&name.to_string_lossy()))
            .unwrap_or(false)
    }
}

/// Check the text after the last dot against [`SAMPLE_EXTENSIONS`]
fn is_sample(lower_name: &str) -> bool {
    match lower_name.rsplit_once('.') {
        Some((_, ext)) => SAMPLE_EXTENSIONS.contains(&ext),
        None => false,
    }
}
