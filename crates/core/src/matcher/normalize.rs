//! Title normalization.

/// Characters treated as word separators in release names.
const SEPARATORS: [char; 4] = ['.', '-', '_', '\u{2013}'];

/// Reduce a release title to a comparable form.
///
/// Lowercases, turns separators into spaces, collapses whitespace runs and
/// trims. Idempotent.
pub fn normalize(title: &str) -> String {
    title
        .to_lowercase()
        .replace(SEPARATORS, " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
