/*!
 * Common test utilities for the transcheck test suite
 */


/// A minimal unified diff adding the given lines to one hunk
pub fn diff_adding(lines: &[&str]) -> String {
    let mut diff = String::from(
        "--- a/Translations.txt\n+++ b/Translations.txt\n@@ -1,2 +1,4 @@\n context line\n",
    );
    for line in lines {
        diff.push('+');
        diff.push_str(line);
        diff.push('\n');
    }
    diff
}
