//! Typographic substitution filter.
//!
//! Replaces a fixed set of ASCII sequences with their single-glyph Unicode
//! equivalents. The table is ordered longest-pattern-first so `<->` wins over
//! `<-` and `->`, and `---` wins over `--`.

use std::sync::LazyLock;

use fancy_regex::Regex;

/// Replacement table, applied in order.
const REPLACEMENTS: [(&str, &str); 17] = [
    ("<->", "\u{2194}"),
    ("->", "\u{2192}"),
    ("<-", "\u{2190}"),
    ("<=>", "\u{21d4}"),
    ("=>", "\u{21d2}"),
    ("<=", "\u{21d0}"),
    (">>", "\u{bb}"),
    ("<<", "\u{ab}"),
    ("---", "\u{2014}"),
    ("--", "\u{2013}"),
    ("(c)", "\u{a9}"),
    ("(C)", "\u{a9}"),
    ("(tm)", "\u{2122}"),
    ("(TM)", "\u{2122}"),
    ("(r)", "\u{ae}"),
    ("(R)", "\u{ae}"),
    ("...", "\u{2026}"),
];

// Look-arounds keep the digits unconsumed, so "2x3x4" converts both signs.
static TIMES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?<=\d)x(?=\d)").expect("times pattern compiles"));

/// ASCII-art to typography filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypoFilter;

impl TypoFilter {
    pub fn apply(&self, input: &str) -> String {
        let mut out = input.to_string();
        for (from, to) in REPLACEMENTS {
            if out.contains(from) {
                out = out.replace(from, to);
            }
        }
        TIMES.replace_all(&out, "\u{d7}").into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_and_dashes() {
        let f = TypoFilter;
        assert_eq!(f.apply("(c) 1999 --- done"), "© 1999 — done");
        assert_eq!(f.apply("(R) and (tm)"), "® and ™");
        assert_eq!(f.apply("wait..."), "wait…");
    }

    #[test]
    fn test_arrow_ordering() {
        let f = TypoFilter;
        // "<->" must not decay into "<" + "->".
        assert_eq!(f.apply("a <-> b"), "a ↔ b");
        assert_eq!(f.apply("a -> b <- c"), "a → b ← c");
        assert_eq!(f.apply("p <=> q"), "p ⇔ q");
        assert_eq!(f.apply("x => y <= z"), "x ⇒ y ⇐ z");
        assert_eq!(f.apply("a << b >> c"), "a « b » c");
    }

    #[test]
    fn test_multiplication_sign() {
        let f = TypoFilter;
        assert_eq!(f.apply("800x600"), "800×600");
        assert_eq!(f.apply("800X600"), "800×600");
        // Non-consuming look-arounds handle chained dimensions.
        assert_eq!(f.apply("2x3x4"), "2×3×4");
        // Not between digits: untouched.
        assert_eq!(f.apply("x marks the spot"), "x marks the spot");
        assert_eq!(f.apply("axb"), "axb");
    }

    #[test]
    fn test_passthrough() {
        let f = TypoFilter;
        assert_eq!(f.apply("plain text"), "plain text");
        assert_eq!(f.apply(""), "");
    }
}
