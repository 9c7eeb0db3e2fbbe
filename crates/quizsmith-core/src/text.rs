//! Text canonicalization used by every answer comparison.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Anything that is neither a word character nor whitespace.
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("static pattern is valid"));

const NBSP: char = '\u{00A0}';
const ZERO_WIDTH_SPACE: char = '\u{200B}';

/// Canonicalize free text for comparison.
///
/// Applies NFKC, turns non-breaking spaces into spaces, drops zero-width
/// spaces, folds punctuation into spaces, collapses whitespace runs, trims,
/// and lower-cases. Pure and idempotent.
pub fn normalize_text(s: &str) -> String {
    let composed: String = s
        .nfkc()
        .filter(|&c| c != ZERO_WIDTH_SPACE)
        .map(|c| if c == NBSP { ' ' } else { c })
        .collect();
    let folded = NON_WORD.replace_all(&composed, " ");
    folded
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// [`normalize_text`] for values that may be absent. `None` becomes `""`.
pub fn normalize_optional(s: Option<&str>) -> String {
    s.map(normalize_text).unwrap_or_default()
}
