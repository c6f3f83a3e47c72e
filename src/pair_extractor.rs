use once_cell::sync::Lazy;
use regex::Regex;

// @module: Translation pair extraction from unified-diff text

// @const: `(source)=(target)` pair regex, non-greedy on both captures
static PAIR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\((.*?)\)=\((.*?)\)").unwrap()
});

/// One `(source)=(target)` translation pair introduced by an added diff line.
///
/// Immutable value object with structural equality. `original_line` is the
/// full added line with its `+` marker stripped, shared verbatim by every
/// pair extracted from that line; the annotation merger later locates the
/// line in live file content by this exact text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationPair {
    /// Source-language text, trimmed of surrounding whitespace
    pub source: String,

    /// Target-language text, trimmed of surrounding whitespace
    pub target: String,

    /// The added line the pair came from, prefix stripped
    pub original_line: String,
}

/// Extract every translation pair introduced by an added line of the given
/// unified-diff text.
///
/// A line is a candidate only if it starts with the `+` addition marker and
/// is not the `+++` diff header. The pair pattern is reapplied across the
/// whole stripped line, so one line may yield several pairs. Emission order
/// is diff line order, then left-to-right match order within a line. Each
/// call performs a fresh scan, so re-running on the same text yields the
/// same sequence.
///
/// An empty capture is a legal (and likely mismatching) pair, not an error.
pub fn extract_pairs(diff: &str) -> Vec<TranslationPair> {
    let mut pairs = Vec::new();

    for line in diff.split('\n') {
        if !line.starts_with('+') || line.starts_with("+++") {
            continue;
        }

        let stripped = &line[1..];
        for caps in PAIR_REGEX.captures_iter(stripped) {
            pairs.push(TranslationPair {
                source: caps[1].trim().to_string(),
                target: caps[2].trim().to_string(),
                original_line: stripped.to_string(),
            });
        }
    }

    pairs
}
