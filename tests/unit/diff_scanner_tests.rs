/*!
 * Tests for translation-file selection from changed files
 */

use transcheck::diff_scanner::{ChangedFile, select_translation_diffs};

fn patterns(list: &[&str]) -> Vec<String> {
    list.iter().map(|pattern| pattern.to_string()).collect()
}

/// Test that files matching by suffix or substring are selected
#[test]
fn test_select_translation_diffs_withMatchingNames_shouldSelect() {
    let files = vec![
        ChangedFile::new("locale/Translations.txt", "+a"),
        ChangedFile::new("src/messages.i18n", "+b"),
        ChangedFile::new("src/main.rs", "+c"),
    ];

    let selected = select_translation_diffs(files, &patterns(&["Translations.txt", ".i18n"]));
    let names: Vec<&str> = selected.iter().map(|f| f.filename.as_str()).collect();
    assert_eq!(names, vec!["locale/Translations.txt", "src/messages.i18n"]);
}

/// Test that a pattern matches anywhere in the path, not only as a suffix
#[test]
fn test_select_translation_diffs_withPatternInMiddle_shouldSelect() {
    let files = vec![ChangedFile::new("app.i18n/en.txt", "+x")];

    let selected = select_translation_diffs(files, &patterns(&[".i18n"]));
    assert_eq!(selected.len(), 1);
}

/// Test that matching is case-sensitive
#[test]
fn test_select_translation_diffs_withDifferentCase_shouldNotSelect() {
    let files = vec![ChangedFile::new("translations.txt", "+x")];

    let selected = select_translation_diffs(files, &patterns(&["Translations.txt"]));
    assert!(selected.is_empty());
}

/// Test that nothing is selected when no pattern matches
#[test]
fn test_select_translation_diffs_withNoMatches_shouldReturnEmpty() {
    let files = vec![
        ChangedFile::new("README.md", "+x"),
        ChangedFile::new("src/lib.rs", "+y"),
    ];

    let selected = select_translation_diffs(files, &patterns(&["Translations.txt", ".i18n"]));
    assert!(selected.is_empty());
}

/// Test that an empty file list stays empty
#[test]
fn test_select_translation_diffs_withNoFiles_shouldReturnEmpty() {
    let selected = select_translation_diffs(Vec::new(), &patterns(&[".i18n"]));
    assert!(selected.is_empty());
}
