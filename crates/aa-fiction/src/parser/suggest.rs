//! "Did you mean" suggestions for mistyped verbs.

use strsim::jaro_winkler;

use super::command::VERBS;

/// Minimum similarity score for a suggestion (0.0-1.0).
const SUGGEST_THRESHOLD: f64 = 0.8;

/// The known verb closest to `input`, if any is close enough.
pub fn suggest_verb(input: &str) -> Option<&'static str> {
    let input = input.to_lowercase();
    VERBS
        .iter()
        .map(|verb| (*verb, jaro_winkler(&input, verb)))
        .filter(|(_, score)| *score >= SUGGEST_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(verb, _)| verb)
}
