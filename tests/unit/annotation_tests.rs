/*!
 * Tests for idempotent error-comment merging into file content
 */

use transcheck::annotation::{MismatchRecord, format_comment, merge_annotations};

fn mismatch(line: &str, source: &str, target: &str, reference: &str) -> MismatchRecord {
    MismatchRecord {
        original_line: line.to_string(),
        source: source.to_string(),
        target: target.to_string(),
        reference: reference.to_string(),
    }
}

/// Test the fixed single-line comment form
#[test]
fn test_format_comment_withMismatch_shouldUseFixedForm() {
    let record = mismatch("(cat)=(perro)", "cat", "perro", "gato");
    assert_eq!(
        format_comment(&record),
        "# Translation error: \"cat\" -> Provided: \"perro\", Expected: \"gato\""
    );
}

/// Test that a comment is inserted directly after the offending line
#[test]
fn test_merge_annotations_withOneMismatch_shouldInsertAfterLine() {
    let content = "header\n(cat)=(perro)\nfooter\n";
    let records = vec![mismatch("(cat)=(perro)", "cat", "perro", "gato")];

    let merged = merge_annotations(content, &records);
    assert_eq!(
        merged,
        "header\n(cat)=(perro)\n# Translation error: \"cat\" -> Provided: \"perro\", Expected: \"gato\"\nfooter\n"
    );
}

/// Test that merging twice changes nothing the second time
#[test]
fn test_merge_annotations_withRepeatedMerge_shouldBeIdempotent() {
    let content = "(cat)=(perro)\n(dog)=(gato)\n";
    let records = vec![
        mismatch("(cat)=(perro)", "cat", "perro", "gato"),
        mismatch("(dog)=(gato)", "dog", "gato", "perro"),
    ];

    let once = merge_annotations(content, &records);
    let twice = merge_annotations(&once, &records);
    assert_eq!(once, twice);
}

/// Test that a mismatch whose line is absent from the content is skipped
/// silently and leaves the content unchanged
#[test]
fn test_merge_annotations_withMissingLine_shouldReturnUnchanged() {
    let content = "unrelated content\n";
    let records = vec![mismatch("(cat)=(perro)", "cat", "perro", "gato")];

    assert_eq!(merge_annotations(content, &records), content);
}

/// Test that an empty mismatch list returns the content unchanged
#[test]
fn test_merge_annotations_withNoMismatches_shouldReturnUnchanged() {
    let content = "(cat)=(gato)\n";
    assert_eq!(merge_annotations(content, &[]), content);
}

/// Test that later replacements see the effect of earlier insertions
#[test]
fn test_merge_annotations_withSeveralMismatches_shouldApplySequentially() {
    let content = "(one)=(dos)\n(two)=(uno)\n";
    let records = vec![
        mismatch("(one)=(dos)", "one", "dos", "uno"),
        mismatch("(two)=(uno)", "two", "uno", "dos"),
    ];

    let merged = merge_annotations(content, &records);
    assert_eq!(
        merged,
        "(one)=(dos)\n# Translation error: \"one\" -> Provided: \"dos\", Expected: \"uno\"\n\
         (two)=(uno)\n# Translation error: \"two\" -> Provided: \"uno\", Expected: \"dos\"\n"
    );
}

/// Test that only the first occurrence of a repeated line is annotated
#[test]
fn test_merge_annotations_withRepeatedLine_shouldAnnotateFirstOccurrence() {
    let content = "(cat)=(perro)\n(cat)=(perro)\n";
    let records = vec![mismatch("(cat)=(perro)", "cat", "perro", "gato")];

    let merged = merge_annotations(content, &records);
    assert_eq!(
        merged,
        "(cat)=(perro)\n# Translation error: \"cat\" -> Provided: \"perro\", Expected: \"gato\"\n(cat)=(perro)\n"
    );
}

/// Test that a line at end of file without a trailing newline still gets
/// its comment
#[test]
fn test_merge_annotations_withLineAtEof_shouldAppendComment() {
    let content = "(cat)=(perro)";
    let records = vec![mismatch("(cat)=(perro)", "cat", "perro", "gato")];

    let merged = merge_annotations(content, &records);
    assert_eq!(
        merged,
        "(cat)=(perro)\n# Translation error: \"cat\" -> Provided: \"perro\", Expected: \"gato\""
    );
}
