//! Vulgar-fraction substitution filter.
//!
//! Replaces the fifteen common ASCII fraction literals with single glyphs.
//! A literal adjacent to another digit is left alone, so "13/4" survives
//! while " 3/4 cup" converts.

use std::sync::LazyLock;

use fancy_regex::{Captures, Regex};

const FRACTIONS: [(&str, &str); 15] = [
    ("1/2", "\u{bd}"),
    ("1/4", "\u{bc}"),
    ("3/4", "\u{be}"),
    ("1/3", "\u{2153}"),
    ("2/3", "\u{2154}"),
    ("1/5", "\u{2155}"),
    ("2/5", "\u{2156}"),
    ("3/5", "\u{2157}"),
    ("4/5", "\u{2158}"),
    ("1/6", "\u{2159}"),
    ("5/6", "\u{215a}"),
    ("1/8", "\u{215b}"),
    ("3/8", "\u{215c}"),
    ("5/8", "\u{215d}"),
    ("7/8", "\u{215e}"),
];

static LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives = FRACTIONS
        .iter()
        .map(|(ascii, _)| *ascii)
        .collect::<Vec<_>>()
        .join("|");
    // Digit-adjacency guard on both sides.
    Regex::new(&format!(r"(?<!\d)({alternatives})(?!\d)")).expect("fraction pattern compiles")
});

fn glyph_for(ascii: &str) -> &str {
    FRACTIONS
        .iter()
        .find(|(a, _)| *a == ascii)
        .map(|(_, glyph)| *glyph)
        .unwrap_or(ascii)
}

/// ASCII fraction literals to vulgar-fraction glyphs.
#[derive(Debug, Clone, Copy, Default)]
pub struct FractionsFilter;

impl FractionsFilter {
    pub fn apply(&self, input: &str) -> String {
        LITERAL
            .replace_all(input, |caps: &Captures| {
                let literal = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
                glyph_for(literal).to_string()
            })
            .into_owned()
    }
}
