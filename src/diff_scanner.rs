// @module: Diff scanning and translation-file selection

/// One changed file in the inspected commit, with its unified-diff patch.
/// Produced by the VCS client; a file with no textual patch (binary, rename)
/// carries an empty diff and yields no pairs downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedFile {
    /// Path of the file within the repository
    pub filename: String,

    /// Unified-diff patch text for this file
    pub diff: String,
}

impl ChangedFile {
    pub fn new(filename: impl Into<String>, diff: impl Into<String>) -> Self {
        ChangedFile {
            filename: filename.into(),
            diff: diff.into(),
        }
    }
}

/// Select the changed files whose names match at least one configured
/// pattern. Patterns are plain case-sensitive substrings, not globs:
/// a file matches when its name ends with or contains the pattern.
pub fn select_translation_diffs(files: Vec<ChangedFile>, patterns: &[String]) -> Vec<ChangedFile> {
    files
        .into_iter()
        .filter(|file| {
            patterns
                .iter()
                .any(|pattern| file.filename.ends_with(pattern) || file.filename.contains(pattern))
        })
        .collect()
}
