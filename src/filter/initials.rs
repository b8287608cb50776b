//! Non-breaking space after single-letter initials.

use std::sync::LazyLock;

use fancy_regex::Regex;

// A single uppercase letter preceded by whitespace and followed by a
// non-whitespace character keeps its trailing space as U+00A0.
static INITIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?<=\s)([A-Z]) (?=\S)").expect("initial pattern compiles"));

/// Keeps single-letter initials glued to the following word.
#[derive(Debug, Clone, Copy, Default)]
pub struct InitialsFilter;

impl InitialsFilter {
    pub fn apply(&self, input: &str) -> String {
        INITIAL.replace_all(input, "${1}\u{a0}").into_owned()
    }
}
