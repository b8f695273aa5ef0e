//! # Taskboard Runtime
//!
//! Runtime implementation for the Taskboard state architecture.
//!
//! This crate provides the [`Store`] that owns one component's state,
//! runs its reducer and executes the effects the reducer returns.
//!
//! ## Execution Model
//!
//! The store is single-threaded and synchronous. `send` takes `&mut self`,
//! runs the reducer to completion and then executes the returned effects in
//! order before returning. An `Effect::Send` feeds its action back into the
//! reducer immediately, so by the time `send` returns every follow-up has been
//! applied and the state is ready to be read.
//!
//! ## Example
//!
//! ```ignore
//! use taskboard_runtime::Store;
//!
//! let mut store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething)?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field);
//! ```

use taskboard_core::{action::Action, effect::Effect, reducer::Reducer};

/// Prometheus metrics for observability
pub mod metrics;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// A chain of `Effect::Send` follow-ups grew deeper than allowed
        ///
        /// Actions applied before the limit was hit stay applied; the
        /// offending follow-up and everything after it are dropped.
        #[error("Effect feedback depth {max} exceeded while dispatching {action}")]
        FeedbackDepthExceeded {
            /// The configured maximum depth
            max: usize,
            /// Name of the action that would have exceeded it
            action: &'static str,
        },
    }
}

pub use error::StoreError;
pub use store::Store;

/// Store configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// How many nested `Effect::Send` follow-ups a single `send` may trigger.
    ///
    /// Default: 8
    pub max_feedback_depth: usize,
}

impl StoreConfig {
    /// Returns the config with a different feedback depth limit
    #[must_use]
    pub const fn with_max_feedback_depth(mut self, depth: usize) -> Self {
        self.max_feedback_depth = depth;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_feedback_depth: 8,
        }
    }
}

/// Store module - the runtime for reducers
pub mod store {
    use super::{Action, Effect, Reducer, StoreConfig, StoreError};
    use crate::metrics::StoreMetrics;
    use std::time::Instant;

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store owns:
    /// 1. State (exclusively, for the lifetime of the component)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected configuration)
    /// 4. Effect execution (with synchronous feedback loop)
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    ///
    /// # Example
    ///
    /// ```ignore
    /// let mut store = Store::new(
    ///     config.initial_state(),
    ///     BoardReducer::new(),
    ///     BoardEnvironment::new(config),
    /// );
    ///
    /// store.send(BoardAction::AddTask {
    ///     title: "Buy milk".to_string(),
    ///     priority: None,
    /// })?;
    /// ```
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: S,
        reducer: R,
        environment: E,
        config: StoreConfig,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        A: Action,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// Uses [`StoreConfig::default`].
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new store with an explicit configuration
        #[must_use]
        pub const fn with_config(
            initial_state: S,
            reducer: R,
            environment: E,
            config: StoreConfig,
        ) -> Self {
            Self {
                state: initial_state,
                reducer,
                environment,
                config,
            }
        }

        /// Send an action to the store
        ///
        /// Runs the reducer, then executes every returned effect in order.
        /// Follow-up actions described by `Effect::Send` are reduced before
        /// this method returns.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::FeedbackDepthExceeded`] if follow-ups nest
        /// deeper than [`StoreConfig::max_feedback_depth`].
        #[tracing::instrument(skip_all, name = "store_send", fields(action = action.name()))]
        pub fn send(&mut self, action: A) -> Result<(), StoreError> {
            self.dispatch(action, 0)
        }

        fn dispatch(&mut self, action: A, depth: usize) -> Result<(), StoreError> {
            let name = action.name();

            if depth > self.config.max_feedback_depth {
                tracing::warn!(
                    action = name,
                    max = self.config.max_feedback_depth,
                    "Rejected follow-up: feedback depth exceeded"
                );
                StoreMetrics::record_rejection();
                return Err(StoreError::FeedbackDepthExceeded {
                    max: self.config.max_feedback_depth,
                    action: name,
                });
            }

            tracing::debug!(action = name, depth, "Processing action");

            let start = Instant::now();
            let effects = self.reducer.reduce(&mut self.state, action, &self.environment);
            StoreMetrics::record_action(name, start.elapsed());

            tracing::trace!("Reducer completed, returned {} effects", effects.len());

            for effect in effects {
                self.execute_effect(effect, depth)?;
            }

            Ok(())
        }

        fn execute_effect(&mut self, effect: Effect<A>, depth: usize) -> Result<(), StoreError> {
            StoreMetrics::record_effect(effect.kind());

            match effect {
                Effect::None => {
                    tracing::trace!("Executing Effect::None (no-op)");
                    Ok(())
                },
                Effect::Send(action) => {
                    tracing::trace!(follow_up = action.name(), "Executing Effect::Send");
                    self.dispatch(*action, depth + 1)
                },
                Effect::Sequential(effects) => {
                    tracing::trace!("Executing Effect::Sequential with {} effects", effects.len());
                    for effect in effects {
                        self.execute_effect(effect, depth)?;
                    }
                    Ok(())
                },
            }
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let task_count = store.state(|s| s.tasks.len());
        /// ```
        pub fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            f(&self.state)
        }

        /// The environment the reducer runs with
        #[must_use]
        pub const fn environment(&self) -> &E {
            &self.environment
        }

        /// The store configuration
        #[must_use]
        pub const fn config(&self) -> StoreConfig {
            self.config
        }

        /// Consume the store and return its final state
        #[must_use]
        pub fn into_state(self) -> S {
            self.state
        }
    }
}
