//! The evaluator: drives the matcher over an ordered pattern set and
//! applies last-match-wins with parent-directory exclusion.

use std::cell::Cell;
use std::collections::HashMap;

use crate::error::IgnoreError;
use crate::matcher::pattern_matches;
use crate::segment::CompiledPattern;
use crate::store::PatternStore;

/// Longer paths are rejected outright rather than walked; this bounds
/// worst-case evaluation cost and matches the documented cap.
const MAX_COMPONENTS: usize = 64;

/// Number of pattern indices kept per literal-basename bucket before
/// overflow is simply left unindexed. The index is a hint, never the
/// authoritative match.
const LITERAL_BUCKET_CAP: usize = 8;

/// Construction-time knobs for an [`Engine`].
#[derive(Debug, Clone, Copy)]
pub struct EngineOptions {
    /// ASCII-only case folding in literal and class matching.
    pub ignore_case: bool,
    /// Maintain the counters returned by [`Engine::stats`]. Has no effect
    /// on match results.
    pub track_stats: bool,
    /// Optional cap, in approximate bytes, on the total size of compiled
    /// pattern data the engine will hold. `None` means unbounded.
    pub max_arena_bytes: Option<usize>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            ignore_case: true,
            track_stats: false,
            max_arena_bytes: None,
        }
    }
}

/// A point-in-time snapshot of an [`Engine`]'s call counters. Only
/// populated when [`EngineOptions::track_stats`] is set; otherwise every
/// field stays at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub total_calls: u64,
    pub literal_hits: u64,
    pub glob_checks: u64,
}

#[derive(Debug, Default)]
struct Counters {
    total_calls: Cell<u64>,
    literal_hits: Cell<u64>,
    glob_checks: Cell<u64>,
}

/// A compiled, queryable gitignore rule set.
///
/// `Engine` is `Send + Sync`: once construction and any `add` calls have
/// finished, it holds no interior mutability reachable from `&self` except
/// the opt-in stats counters, and those are only ever written from
/// `ignores`/`ignores_dir`, which take `&self` but are documented as not
/// safe to call concurrently with `add`. Many readers may share an
/// `Arc<Engine>` once the pattern set is final.
#[derive(Debug)]
pub struct Engine {
    store: PatternStore,
    options: EngineOptions,
    counters: Counters,
    literal_index: HashMap<Vec<u8>, Vec<usize>>,
}

impl Engine {
    pub fn new(options: EngineOptions) -> Self {
        Self {
            store: PatternStore::new(options.max_arena_bytes),
            options,
            counters: Counters::default(),
            literal_index: HashMap::new(),
        }
    }

    /// Number of compiled patterns currently held.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Pattern-set indices recorded under a lowercased literal basename, if
    /// any were indexed. Purely a diagnostic/acceleration hint -- the
    /// evaluator never consults this for correctness.
    pub fn literal_candidates(&self, basename: &[u8]) -> Option<&[usize]> {
        self.literal_index
            .get(&basename.to_ascii_lowercase())
            .map(Vec::as_slice)
    }

    /// Compile and append every line of `text`, in order. Blank lines,
    /// comments, and malformed escapes are silently skipped; the only way
    /// this fails is running out of the configured pattern-data budget.
    pub fn add(&mut self, text: &str) -> Result<(), IgnoreError> {
        for line in text.split('\n') {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let Some(pattern) = crate::compiler::compile_line(line.as_bytes()) else {
                continue;
            };
            let is_literal = pattern.is_literal;
            let basename = pattern.literal_basename.clone();
            let index = self.store.len();
            self.store.push(pattern)?;
            if is_literal {
                if let Some(basename) = basename {
                    let key = basename.to_ascii_lowercase();
                    let bucket = self.literal_index.entry(key).or_default();
                    if bucket.len() < LITERAL_BUCKET_CAP {
                        bucket.push(index);
                    }
                }
            }
        }
        Ok(())
    }

    /// Whether `path` is ignored. A trailing `/` is treated the same as
    /// passing `is_dir = true` for a path with the slash stripped.
    pub fn ignores(&self, path: &str) -> bool {
        match path.strip_suffix('/') {
            Some(stripped) => self.ignores_dir(stripped, true),
            None => self.ignores_dir(path, false),
        }
    }

    /// Whether `path` (known to be a directory iff `is_dir`) is ignored.
    pub fn ignores_dir(&self, path: &str, is_dir: bool) -> bool {
        if self.options.track_stats {
            self.counters.total_calls.set(self.counters.total_calls.get() + 1);
        }

        if !is_valid_path(path) {
            return false;
        }

        let is_dir = is_dir || path.ends_with('/');
        let path = path.strip_suffix('/').unwrap_or(path);

        let components: Vec<&[u8]> = path
            .split('/')
            .filter(|c| !c.is_empty())
            .map(str::as_bytes)
            .collect();

        if components.is_empty() || components.len() > MAX_COMPONENTS {
            return false;
        }

        for k in 1..components.len() {
            if self.evaluate(&components[..k], true) {
                return true;
            }
        }

        self.evaluate(&components, is_dir)
    }

    /// Last-match-wins pass of every pattern against one fixed set of path
    /// components.
    fn evaluate(&self, components: &[&[u8]], is_dir: bool) -> bool {
        let mut ignored = false;
        for pattern in self.store.iter() {
            if pattern.min_depth > components.len() {
                continue;
            }
            if self.options.track_stats {
                if pattern.is_literal {
                    self.counters.literal_hits.set(self.counters.literal_hits.get() + 1);
                } else {
                    self.counters.glob_checks.set(self.counters.glob_checks.get() + 1);
                }
            }
            if self.matches_one(pattern, components, is_dir) {
                ignored = !pattern.flags.negated;
            }
        }
        ignored
    }

    fn matches_one(&self, pattern: &CompiledPattern, components: &[&[u8]], is_dir: bool) -> bool {
        pattern_matches(pattern, components, is_dir, self.options.ignore_case)
    }

    /// Snapshot of the call counters. All zero unless
    /// [`EngineOptions::track_stats`] was set at construction.
    pub fn stats(&self) -> Stats {
        Stats {
            total_calls: self.counters.total_calls.get(),
            literal_hits: self.counters.literal_hits.get(),
            glob_checks: self.counters.glob_checks.get(),
        }
    }
}

/// Rejects absolute paths, Windows drive prefixes, and `.`/`..` components
/// at the front of the path -- everything the evaluator refuses to reason
/// about.
fn is_valid_path(path: &str) -> bool {
    if path.is_empty() || path.starts_with('/') {
        return false;
    }
    if path.len() >= 2 && path.as_bytes()[1] == b':' {
        return false;
    }
    path != "." && path != ".." && !path.starts_with("./") && !path.starts_with("../")
}
