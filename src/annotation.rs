// @module: Inline error-comment merging into file content

/// One mismatching pair carried forward for reporting and annotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MismatchRecord {
    /// The added line the pair came from, prefix stripped
    pub original_line: String,

    /// Source-language text of the pair
    pub source: String,

    /// Target text the author provided
    pub target: String,

    /// Translation the oracle expected
    pub reference: String,
}

/// Build the single-line comment documenting one mismatch
pub fn format_comment(record: &MismatchRecord) -> String {
    format!(
        "# Translation error: \"{}\" -> Provided: \"{}\", Expected: \"{}\"",
        record.source, record.target, record.reference
    )
}

/// Merge error comments into file content, one after each offending line.
///
/// For each mismatch, the comment is inserted directly after the first
/// literal occurrence of its `original_line`, against the progressively
/// updated content so later replacements see earlier insertions. A comment
/// already present anywhere in the content is skipped, which makes the merge
/// idempotent: merging the same mismatch list into already-annotated content
/// changes nothing.
///
/// A mismatch whose `original_line` no longer appears in the content (the
/// file diverged from the diff snapshot) is skipped silently; it stays a
/// reported failure upstream, it just gets no inline comment. When nothing
/// applies the original content is returned unchanged, which callers use as
/// the "no update needed" signal.
pub fn merge_annotations(original: &str, mismatches: &[MismatchRecord]) -> String {
    let mut content = original.to_string();

    for record in mismatches {
        if record.original_line.is_empty() {
            continue;
        }

        let comment = format_comment(record);
        if content.contains(&comment) {
            continue;
        }

        if let Some(pos) = content.find(&record.original_line) {
            let end = pos + record.original_line.len();
            content = format!(
                "{}{}\n{}{}",
                &content[..pos],
                &record.original_line,
                comment,
                &content[end..]
            );
        }
    }

    content
}
