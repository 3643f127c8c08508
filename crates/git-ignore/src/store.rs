//! Owning collection of compiled patterns.
//!
//! Patterns are appended in file/line order and never reordered or removed
//! individually: a [`PatternStore`] is the single allocation-owning
//! structure behind an [`crate::Engine`], so dropping the engine releases
//! every pattern's backing bytes in one shot. There is no separate
//! bump-allocator here -- each [`CompiledPattern`] owns its own `BString`
//! and element data, and the `Vec` below is the only thing that needs to be
//! freed to tear the whole set down.
use crate::error::IgnoreError;
use crate::segment::CompiledPattern;

/// Ordered, append-only store of compiled patterns with an optional byte
/// budget.
#[derive(Debug, Default)]
pub struct PatternStore {
    patterns: Vec<CompiledPattern>,
    max_bytes: Option<usize>,
    used_bytes: usize,
}

impl PatternStore {
    pub fn new(max_bytes: Option<usize>) -> Self {
        Self {
            patterns: Vec::new(),
            max_bytes,
            used_bytes: 0,
        }
    }

    /// Append a compiled pattern, enforcing the configured byte budget.
    pub fn push(&mut self, pattern: CompiledPattern) -> Result<(), IgnoreError> {
        let size = pattern.approx_size();
        if let Some(max) = self.max_bytes {
            if self.used_bytes + size > max {
                return Err(IgnoreError::ArenaExhausted { requested: size });
            }
        }
        self.used_bytes += size;
        self.patterns.push(pattern);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Iterate patterns in insertion order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &CompiledPattern> {
        self.patterns.iter()
    }
}
