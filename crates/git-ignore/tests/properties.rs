//! Property-based tests for the invariants listed in the design notes:
//! trailing-slash equivalence, referential transparency, and parent-exclusion
//! monotonicity.

use git_ignore::{Engine, EngineOptions};
use proptest::prelude::*;

fn component() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{1,6}"
}

fn path_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(component(), 1..5)
}

fn pattern_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9_]{1,6}\\.[a-z]{1,3}".prop_map(|s| s),
        "[a-zA-Z0-9_]{1,6}/".prop_map(|s| s),
        "/[a-zA-Z0-9_]{1,6}".prop_map(|s| s),
        "\\*\\*/[a-zA-Z0-9_]{1,6}".prop_map(|s| s),
        "![a-zA-Z0-9_]{1,6}\\.[a-z]{1,3}".prop_map(|s| s),
    ]
}

proptest! {
    #[test]
    fn trailing_slash_equals_explicit_is_dir(components in path_strategy(), patterns in prop::collection::vec(pattern_strategy(), 0..8)) {
        let mut engine = Engine::new(EngineOptions::default());
        engine.add(&patterns.join("\n")).unwrap();

        let path = components.join("/");
        let with_slash = format!("{path}/");

        prop_assert_eq!(engine.ignores(&with_slash), engine.ignores_dir(&path, true));
    }

    #[test]
    fn same_inputs_give_same_answer(components in path_strategy(), patterns in prop::collection::vec(pattern_strategy(), 0..8), is_dir in any::<bool>()) {
        let mut engine = Engine::new(EngineOptions::default());
        engine.add(&patterns.join("\n")).unwrap();

        let path = components.join("/");
        let first = engine.ignores_dir(&path, is_dir);
        let second = engine.ignores_dir(&path, is_dir);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn parent_exclusion_is_monotonic(components in path_strategy(), patterns in prop::collection::vec(pattern_strategy(), 0..8)) {
        prop_assume!(components.len() >= 2);
        let mut engine = Engine::new(EngineOptions::default());
        engine.add(&patterns.join("\n")).unwrap();

        let parent = components[..components.len() - 1].join("/");
        let full = components.join("/");

        if engine.ignores_dir(&parent, true) {
            prop_assert!(engine.ignores_dir(&full, false));
        }
    }

    #[test]
    fn blank_lines_never_change_behavior(components in path_strategy(), patterns in prop::collection::vec(pattern_strategy(), 0..8), is_dir in any::<bool>()) {
        let base_text = patterns.join("\n");

        let mut plain = Engine::new(EngineOptions::default());
        plain.add(&base_text).unwrap();

        let mut padded = Engine::new(EngineOptions::default());
        padded.add(&format!("\n  \n# comment\n{base_text}\n\n")).unwrap();

        let path = components.join("/");
        prop_assert_eq!(plain.ignores_dir(&path, is_dir), padded.ignores_dir(&path, is_dir));
    }
}
