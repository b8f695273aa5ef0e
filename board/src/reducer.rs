//! Reducer logic for the board.
//!
//! Intents are validated against current state. An accepted intent becomes an
//! event, which is applied to state. A rejected intent is ignored: nothing
//! changes, no event is produced and no error is surfaced.

use crate::config::BoardConfig;
use crate::types::{BoardAction, BoardState, Priority, Task, TaskId};
use taskboard_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};

/// Environment for the board reducer
#[derive(Clone, Debug, Default)]
pub struct BoardEnvironment {
    /// Board configuration
    pub config: BoardConfig,
}

impl BoardEnvironment {
    /// Creates a new `BoardEnvironment`
    #[must_use]
    pub const fn new(config: BoardConfig) -> Self {
        Self { config }
    }
}

/// Reducer for the board
#[derive(Clone, Copy, Debug, Default)]
pub struct BoardReducer;

impl BoardReducer {
    /// Creates a new `BoardReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Priority a new record gets in this board
    fn priority_for_new(env: &BoardEnvironment, requested: Option<Priority>) -> Option<Priority> {
        env.config
            .variant
            .has_priority()
            .then_some(requested.unwrap_or(env.config.default_priority))
    }

    /// Applies an event to state
    ///
    /// Events arriving from outside the reducer (replay) get the same
    /// invariants enforced: ids above every id ever assigned, no blank
    /// titles, no priorities on a minimal board.
    fn apply_event(state: &mut BoardState, event: &BoardAction, env: &BoardEnvironment) {
        match event {
            BoardAction::TaskAdded { task } => {
                if task.id.get() <= state.last_id {
                    tracing::debug!(id = %task.id, "Ignoring TaskAdded: id already assigned");
                    return;
                }
                let title = task.title.trim();
                if title.is_empty() {
                    tracing::debug!(id = %task.id, "Ignoring TaskAdded: title is blank");
                    return;
                }
                state.last_id = state.last_id.max(task.id.get());
                state.tasks.push(Task {
                    id: task.id,
                    title: title.to_string(),
                    completed: task.completed,
                    priority: Self::priority_for_new(env, task.priority),
                });
            },
            BoardAction::CompletionToggled { id, completed } => {
                if let Some(task) = state.get_mut(*id) {
                    task.completed = *completed;
                }
            },
            BoardAction::TaskRemoved { id } => {
                state.tasks.retain(|t| t.id != *id);
            },
            BoardAction::PriorityChanged { id, priority } => {
                if !env.config.variant.has_priority() {
                    return;
                }
                if let Some(task) = state.get_mut(*id) {
                    task.priority = Some(*priority);
                }
            },
            // Intents are not applied to state
            BoardAction::SetPendingTitle { .. }
            | BoardAction::SetPendingPriority { .. }
            | BoardAction::SubmitAdd
            | BoardAction::AddTask { .. }
            | BoardAction::ToggleCompletion { .. }
            | BoardAction::RemoveTask { .. }
            | BoardAction::ChangePriority { .. }
            | BoardAction::SetPriorityFilter { .. }
            | BoardAction::SetStatusFilter { .. } => {},
        }
    }

    fn add_task(
        state: &mut BoardState,
        title: &str,
        priority: Option<Priority>,
        env: &BoardEnvironment,
    ) {
        let title = title.trim();
        if title.is_empty() {
            tracing::debug!("Ignoring add: title is blank");
            return;
        }

        let Some(id) = state.next_id() else {
            tracing::debug!("Ignoring add: identifiers exhausted");
            return;
        };
        let event = BoardAction::TaskAdded {
            task: Task::new(id, title.to_string(), Self::priority_for_new(env, priority)),
        };
        Self::apply_event(state, &event, env);

        state.pending_title.clear();
        state.pending_priority = env.config.default_priority;

        tracing::debug!(%id, "Task added");
    }

    fn toggle(state: &mut BoardState, id: TaskId, env: &BoardEnvironment) {
        let Some(task) = state.get(id) else {
            tracing::debug!(%id, "Ignoring toggle: unknown id");
            return;
        };

        let event = BoardAction::CompletionToggled {
            id,
            completed: !task.completed,
        };
        Self::apply_event(state, &event, env);
    }

    fn remove(state: &mut BoardState, id: TaskId, env: &BoardEnvironment) {
        if !state.exists(id) {
            tracing::debug!(%id, "Ignoring remove: unknown id");
            return;
        }

        Self::apply_event(state, &BoardAction::TaskRemoved { id }, env);
    }

    fn change_priority(
        state: &mut BoardState,
        id: TaskId,
        priority: Priority,
        env: &BoardEnvironment,
    ) {
        if !env.config.variant.has_priority() {
            tracing::debug!(%id, "Ignoring priority change: board has no priorities");
            return;
        }
        if !state.exists(id) {
            tracing::debug!(%id, "Ignoring priority change: unknown id");
            return;
        }

        Self::apply_event(state, &BoardAction::PriorityChanged { id, priority }, env);
    }
}

impl Reducer for BoardReducer {
    type State = BoardState;
    type Action = BoardAction;
    type Environment = BoardEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let has_priority = env.config.variant.has_priority();

        match action {
            // ========== Pending input ==========
            BoardAction::SetPendingTitle { text } => {
                state.pending_title = text;
            },

            BoardAction::SetPendingPriority { priority } => {
                if has_priority {
                    state.pending_priority = priority;
                } else {
                    tracing::debug!("Ignoring pending priority: board has no priorities");
                }
            },

            BoardAction::SubmitAdd => {
                return smallvec![Effect::send(BoardAction::AddTask {
                    title: state.pending_title.clone(),
                    priority: has_priority.then_some(state.pending_priority),
                })];
            },

            // ========== Record store ==========
            BoardAction::AddTask { title, priority } => {
                Self::add_task(state, &title, priority, env);
            },

            BoardAction::ToggleCompletion { id } => Self::toggle(state, id, env),

            BoardAction::RemoveTask { id } => Self::remove(state, id, env),

            BoardAction::ChangePriority { id, priority } => {
                Self::change_priority(state, id, priority, env);
            },

            // ========== View filter ==========
            BoardAction::SetPriorityFilter { filter } => {
                if has_priority {
                    state.filter.priority = filter;
                } else {
                    tracing::debug!("Ignoring priority filter: board has no filters");
                }
            },

            BoardAction::SetStatusFilter { filter } => {
                if has_priority {
                    state.filter.status = filter;
                } else {
                    tracing::debug!("Ignoring status filter: board has no filters");
                }
            },

            // ========== Events ==========
            BoardAction::TaskAdded { .. }
            | BoardAction::CompletionToggled { .. }
            | BoardAction::TaskRemoved { .. }
            | BoardAction::PriorityChanged { .. } => {
                // Replayed from outside; accepted intents apply their own events
                Self::apply_event(state, &action, env);
            },
        }

        SmallVec::new()
    }
}
