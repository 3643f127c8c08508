//! Slash-delimited pattern segments and the compiled pattern record.

use bstr::BString;

use crate::element::Element;

/// Rough per-element byte footprint, used only to size the pattern store's
/// optional budget; not an exact `size_of` accounting.
fn element_size(element: &Element) -> usize {
    match element {
        Element::Literal(bytes) => bytes.len(),
        Element::Star | Element::SingleChar => 1,
        Element::CharClassRef(_) => std::mem::size_of::<crate::charclass::CharClass>(),
    }
}

/// One slash-delimited piece of a pattern body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A bare `**` segment: matches zero or more path components.
    Globstar,
    /// An ordinary segment carrying an ordered element sequence.
    Normal(Vec<Element>),
}

impl Segment {
    pub fn is_globstar(&self) -> bool {
        matches!(self, Segment::Globstar)
    }
}

/// The three independent flags a pattern line can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PatternFlags {
    /// Leading `!`: a match un-ignores rather than ignores.
    pub negated: bool,
    /// Trailing `/`: the pattern only matches directories.
    pub dir_only: bool,
    /// Leading `/`, or an internal `/` not preceded by `**`: matching
    /// starts at path component zero instead of trying every offset.
    pub anchored: bool,
}

/// A single compiled gitignore rule, ready for repeated matching.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// Original raw line, kept for diagnostics only.
    pub raw: BString,
    pub segments: Vec<Segment>,
    pub flags: PatternFlags,
    /// True when the body contains no `*`, `?`, or `[`.
    pub is_literal: bool,
    /// The substring following the last `/` in the body, when `is_literal`.
    pub literal_basename: Option<BString>,
    /// Count of non-globstar segments; a path shorter than this cannot match.
    pub min_depth: usize,
}

impl CompiledPattern {
    pub(crate) fn min_depth_of(segments: &[Segment]) -> usize {
        segments.iter().filter(|s| !s.is_globstar()).count()
    }

    /// Approximate heap footprint of this pattern, for
    /// [`crate::EngineOptions::max_arena_bytes`] accounting.
    pub fn approx_size(&self) -> usize {
        let segments_size: usize = self
            .segments
            .iter()
            .map(|s| match s {
                Segment::Globstar => 0,
                Segment::Normal(elements) => elements.iter().map(element_size).sum(),
            })
            .sum();

        self.raw.len() + segments_size
    }
}
