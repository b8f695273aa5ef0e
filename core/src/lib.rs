//! # Taskboard Core
//!
//! Core traits and types for the Taskboard state architecture.
//!
//! This crate provides the abstractions every Taskboard component is built on:
//! a state value owned by a store, a closed set of actions, and a reducer that
//! maps `(State, Action, Environment)` to a new state plus effect descriptions.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state owned by one component instance
//! - **Action**: All inputs to a reducer (user intents and domain events)
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Follow-up work described as a value, executed by the store
//! - **Environment**: Injected configuration and dependencies
//!
//! ## Example
//!
//! ```
//! use taskboard_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! #[derive(Clone, Debug, Default)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut CounterState,
//!         action: CounterAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<CounterAction>; 4]> {
//!         match action {
//!             CounterAction::Increment => state.count += 1,
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! let mut state = CounterState::default();
//! CounterReducer.reduce(&mut state, CounterAction::Increment, &());
//! assert_eq!(state.count, 1);
//! ```

// Re-export commonly used types
pub use serde::{Deserialize, Serialize};
pub use smallvec::{smallvec, SmallVec};

/// Action module - the unified input type for reducers
///
/// Actions cover both intents (requests raised by a user or caller) and events
/// (facts the reducer has accepted and applied). Action enums usually derive
/// this trait with `#[derive(Action)]` from `taskboard-macros`.
pub mod action {
    /// Common behavior of action enums
    ///
    /// The store uses [`Action::name`] to label log spans and metrics, so it
    /// must be cheap and must not allocate.
    pub trait Action {
        /// The variant name of this action (e.g. `"ToggleCompletion"`)
        fn name(&self) -> &'static str;

        /// Returns true if this action is an intent raised by a caller
        fn is_intent(&self) -> bool;

        /// Returns true if this action is an event produced by the reducer
        fn is_event(&self) -> bool;
    }
}

/// Reducer module - the core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`.
/// They hold all business logic and are deterministic and testable without a
/// store.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected configuration this reducer needs
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for BoardReducer {
    ///     type State = BoardState;
    ///     type Action = BoardAction;
    ///     type Environment = BoardEnvironment;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &mut BoardState,
    ///         action: BoardAction,
    ///         env: &BoardEnvironment,
    ///     ) -> SmallVec<[Effect<BoardAction>; 4]> {
    ///         match action {
    ///             BoardAction::ToggleCompletion { id } => {
    ///                 // Business logic here
    ///                 smallvec![Effect::None]
    ///             }
    ///             _ => smallvec![Effect::None],
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected configuration
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Validates the action
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be executed by the store
        ///
        /// # Arguments
        ///
        /// - `state`: Mutable reference to current state
        /// - `action`: The action to process
        /// - `env`: Reference to injected configuration
        ///
        /// # Returns
        ///
        /// Effects to be executed by the runtime, in order
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - follow-up work descriptions
///
/// Effects are values, not execution. A reducer returns them and the store
/// executes them after the reducer has finished, synchronously and in order.
pub mod effect {
    /// Effect type - describes follow-up work for the store
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can feed back into the reducer
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Dispatch an action through the same store once the current
        /// reducer call has returned
        Send(Box<Action>),

        /// Run effects one after another
        Sequential(Vec<Effect<Action>>),
    }

    impl<Action> Effect<Action> {
        /// Describe dispatching `action` as a follow-up
        #[must_use]
        pub fn send(action: Action) -> Self {
            Effect::Send(Box::new(action))
        }

        /// Chain effects to run sequentially
        #[must_use]
        pub const fn chain(effects: Vec<Effect<Action>>) -> Self {
            Effect::Sequential(effects)
        }

        /// Returns true if executing this effect does nothing
        #[must_use]
        pub fn is_none(&self) -> bool {
            match self {
                Effect::None => true,
                Effect::Send(_) => false,
                Effect::Sequential(effects) => effects.iter().all(Effect::is_none),
            }
        }

        /// Short label for logs and metrics
        #[must_use]
        pub const fn kind(&self) -> &'static str {
            match self {
                Effect::None => "none",
                Effect::Send(_) => "send",
                Effect::Sequential(_) => "sequential",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::effect::Effect;

    #[test]
    fn send_wraps_action() {
        let effect = Effect::send(7_u32);
        assert_eq!(effect, Effect::Send(Box::new(7)));
        assert_eq!(effect.kind(), "send");
        assert!(!effect.is_none());
    }

    #[test]
    fn sequential_of_noops_is_none() {
        let effect: Effect<u32> = Effect::chain(vec![Effect::None, Effect::chain(vec![])]);
        assert!(effect.is_none());

        let effect = Effect::chain(vec![Effect::None, Effect::send(1_u32)]);
        assert!(!effect.is_none());
    }
}
