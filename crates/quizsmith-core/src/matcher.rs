//! Fuzzy answer matching over normalized text.

use std::collections::HashSet;

use crate::text::{normalize_optional, normalize_text};

/// Share of the accepted answer's words the candidate must contain, exclusive.
pub const WORD_OVERLAP_THRESHOLD: f64 = 0.5;

/// Decide whether `candidate` matches any of the `accepted` answers.
///
/// A normalized accepted answer matches when it equals the normalized
/// candidate, when either one contains the other, or when the candidate
/// shares strictly more than half of the accepted answer's distinct words.
/// Empty raw strings are skipped. Text that only normalizes to `""` is
/// compared like any other, so it is contained in every candidate.
pub fn answers_match<S: AsRef<str>>(candidate: &str, accepted: &[S]) -> bool {
    if candidate.is_empty() || accepted.is_empty() {
        return false;
    }

    let candidate = normalize_text(candidate);
    let candidate_words: HashSet<&str> = candidate.split_whitespace().collect();

    accepted
        .iter()
        .map(<S as AsRef<str>>::as_ref)
        .filter(|a| !a.is_empty())
        .map(normalize_text)
        .any(|accepted| {
            if candidate == accepted
                || candidate.contains(accepted.as_str())
                || accepted.contains(candidate.as_str())
            {
                return true;
            }
            word_overlap(&candidate_words, &accepted) > WORD_OVERLAP_THRESHOLD
        })
}

/// The narrower rule used when grading free-text questions: some non-empty
/// accepted answer, normalized, is contained in the normalized submission.
///
/// Unlike [`answers_match`] there is no reverse containment and no word
/// overlap. A missing submission counts as `""`. An accepted answer made
/// only of punctuation normalizes to `""` and is contained in any submission.
pub fn contains_accepted<S: AsRef<str>>(submission: Option<&str>, accepted: &[S]) -> bool {
    let submission = normalize_optional(submission);
    accepted
        .iter()
        .map(<S as AsRef<str>>::as_ref)
        .filter(|a| !a.is_empty())
        .any(|a| submission.contains(normalize_text(a).as_str()))
}

/// Fraction of the accepted answer's distinct words present in the candidate.
fn word_overlap(candidate_words: &HashSet<&str>, accepted: &str) -> f64 {
    let accepted_words: HashSet<&str> = accepted.split_whitespace().collect();
    let shared = accepted_words.intersection(candidate_words).count();
    shared as f64 / accepted_words.len().max(1) as f64
}
