//! # Taskboard Testing
//!
//! Testing utilities and helpers for the Taskboard state architecture.
//!
//! This crate provides:
//! - [`ReducerTest`]: Given-When-Then harness for reducers
//! - [`assertions`]: Assertion helpers for effects
//! - [`properties`]: proptest strategies for text inputs
//! - [`init_test_tracing`]: Log capture for tests
//!
//! ## Example
//!
//! ```ignore
//! use taskboard_testing::{assertions, ReducerTest};
//!
//! ReducerTest::new(BoardReducer::new())
//!     .with_env(BoardEnvironment::default())
//!     .given_state(BoardState::default())
//!     .when_action(BoardAction::AddTask { title: "Buy milk".into(), priority: None })
//!     .then_state(|state| assert_eq!(state.tasks.len(), 1))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```


pub use reducer_test::{assertions, ReducerTest};

/// Property-based testing utilities
///
/// Strategies for the text a user types into an input box: blank input that
/// must be rejected, and input with visible content surrounded by arbitrary
/// padding that must be trimmed.
pub mod properties {
    use proptest::prelude::*;

    /// Whitespace-only strings, including the empty string
    pub fn blank_text() -> impl Strategy<Value = String> {
        proptest::collection::vec(prop_oneof![Just(' '), Just('\t'), Just('\n'), Just('\r')], 0..8)
            .prop_map(|chars| chars.into_iter().collect())
    }

    /// Strings with no surrounding whitespace and at least one visible character
    pub fn non_blank_text() -> impl Strategy<Value = String> {
        "[A-Za-z0-9][A-Za-z0-9 .,!?-]{0,30}[A-Za-z0-9]|[A-Za-z0-9]"
    }

    /// `text` surrounded by arbitrary blank padding on both sides
    pub fn padded(text: String) -> impl Strategy<Value = String> {
        (blank_text(), blank_text()).prop_map(move |(left, right)| format!("{left}{text}{right}"))
    }
}

/// Install a `tracing` subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskboard=debug,taskboard_runtime=debug".into()),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::properties::{blank_text, non_blank_text, padded};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn blank_text_trims_to_empty(text in blank_text()) {
            prop_assert!(text.trim().is_empty());
        }

        #[test]
        fn non_blank_text_is_trimmed(text in non_blank_text()) {
            prop_assert!(!text.is_empty());
            prop_assert_eq!(text.trim(), text.as_str());
        }

        #[test]
        fn padded_trims_back(input in non_blank_text().prop_flat_map(padded)) {
            prop_assert!(!input.trim().is_empty());
        }
    }

    #[test]
    fn init_test_tracing_is_idempotent() {
        super::init_test_tracing();
        super::init_test_tracing();
    }
}
