//! Error type for the `git-ignore` crate.

/// Errors raised while building or growing an [`crate::Engine`].
#[derive(Debug, thiserror::Error)]
pub enum IgnoreError {
    /// [`crate::EngineOptions::max_arena_bytes`] would be exceeded by
    /// admitting the next pattern.
    #[error("pattern store exhausted: {requested} more bytes would exceed the configured limit")]
    ArenaExhausted { requested: usize },
}

pub type Result<T> = std::result::Result<T, IgnoreError>;
