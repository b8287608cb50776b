//! Leaf-value filtering subsystem.
//!
//! # Data Flow
//! ```text
//! scalar leaf (stringified)
//!     → FilterChain::apply
//!     → each Filter in chain order (left to right)
//!     → filtered string placed into the node tree
//! ```
//!
//! # Design Decisions
//! - Filters are a tagged variant list, not a trait hierarchy
//! - Each filter captures its substitution tables at construction
//! - Filters never fail; unmatched text passes through unchanged
//! - Chain is immutable once built and shared read-only across requests

pub mod fractions;
pub mod initials;
pub mod typo;

use thiserror::Error;

pub use fractions::FractionsFilter;
pub use initials::InitialsFilter;
pub use typo::TypoFilter;

/// A single pure string transform.
#[derive(Debug, Clone)]
pub enum Filter {
    /// ASCII art (arrows, dashes, marks, ellipsis) to single glyphs.
    Typographic(TypoFilter),
    /// Non-breaking space after single-letter initials.
    Initials(InitialsFilter),
    /// Common ASCII fractions to vulgar-fraction glyphs.
    Fractions(FractionsFilter),
}

impl Filter {
    /// Look up a filter by its configuration name.
    pub fn by_name(name: &str) -> Option<Filter> {
        match name {
            "typographic" => Some(Filter::Typographic(TypoFilter)),
            "initials" => Some(Filter::Initials(InitialsFilter)),
            "fractions" => Some(Filter::Fractions(FractionsFilter)),
            _ => None,
        }
    }

    /// Apply this filter to the input, returning the transformed string.
    pub fn apply(&self, input: &str) -> String {
        match self {
            Filter::Typographic(f) => f.apply(input),
            Filter::Initials(f) => f.apply(input),
            Filter::Fractions(f) => f.apply(input),
        }
    }
}

/// A configuration name that does not correspond to any built-in filter.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown filter {0:?}")]
pub struct UnknownFilter(pub String);

/// Ordered, immutable sequence of filters applied to every scalar leaf.
#[derive(Debug, Clone, Default)]
pub struct FilterChain {
    filters: Vec<Filter>,
}

impl FilterChain {
    /// Build a chain from filters in application order.
    pub fn new(filters: Vec<Filter>) -> Self {
        Self { filters }
    }

    /// The empty chain; acts as the identity function.
    pub fn empty() -> Self {
        Self::default()
    }

    /// All built-in filters in their canonical order.
    pub fn standard() -> Self {
        Self::new(vec![
            Filter::Typographic(TypoFilter),
            Filter::Initials(InitialsFilter),
            Filter::Fractions(FractionsFilter),
        ])
    }

    /// Build a chain from configuration names, preserving their order.
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Result<Self, UnknownFilter> {
        let mut filters = Vec::new();
        for name in names {
            filters.push(Filter::by_name(name).ok_or_else(|| UnknownFilter(name.to_string()))?);
        }
        Ok(Self::new(filters))
    }

    /// Fold the input through every filter in chain order.
    pub fn apply(&self, input: &str) -> String {
        self.filters
            .iter()
            .fold(input.to_string(), |s, f| f.apply(&s))
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}
