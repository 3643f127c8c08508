//! Gitignore-compatible path matching.
//!
//! Evaluates whether a relative path is ignored under the gitignore rule
//! language, with semantics compatible with the widely deployed
//! `node-ignore` library. The engine is a passive, in-memory rule set: it
//! consumes pattern text via [`Engine::add`] and answers queries via
//! [`Engine::ignores`]. It does not walk the filesystem, load
//! `.gitignore` files, or know anything about `.git/info/exclude` layering
//! -- callers own that and feed this engine the composed text.
//!
//! ```
//! use git_ignore::{Engine, EngineOptions};
//!
//! let mut engine = Engine::new(EngineOptions::default());
//! engine.add("*.log\n!important.log\n").unwrap();
//! assert!(engine.ignores("debug.log"));
//! assert!(!engine.ignores("important.log"));
//! ```

pub mod charclass;
pub mod compiler;
pub mod element;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod segment;
pub mod store;

pub use charclass::CharClass;
pub use element::Element;
pub use engine::{Engine, EngineOptions, Stats};
pub use error::{IgnoreError, Result};
pub use segment::{CompiledPattern, PatternFlags, Segment};
