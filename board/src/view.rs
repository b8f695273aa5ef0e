//! Derived view of the board.
//!
//! The view is a pure projection: it is recomputed from the full record
//! collection and the current filter selectors on every read and never
//! stored. Filter changes therefore cannot leave a stale view behind.

use crate::types::{BoardState, Priority, PriorityFilter, StatusFilter, Task, Variant};
use serde::{Deserialize, Serialize};

/// The two filter selectors of the appointment variant
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewFilter {
    /// Priority selector
    pub priority: PriorityFilter,
    /// Completion-status selector
    pub status: StatusFilter,
}

impl ViewFilter {
    /// Filter admitting every record
    pub const ALL: Self = Self::new(PriorityFilter::All, StatusFilter::All);

    /// Creates a filter from both selectors
    #[must_use]
    pub const fn new(priority: PriorityFilter, status: StatusFilter) -> Self {
        Self { priority, status }
    }

    /// Returns true if `task` passes both selectors
    #[must_use]
    pub fn admits(&self, task: &Task) -> bool {
        self.priority.admits(task.priority) && self.status.admits(task.completed)
    }
}

/// Records of `tasks` admitted by `filter`, in their original order
#[must_use]
pub fn derive_view(tasks: &[Task], filter: ViewFilter) -> Vec<&Task> {
    tasks.iter().filter(|task| filter.admits(task)).collect()
}

/// The view a board of the given variant shows
///
/// A minimal board has no filtering and always shows every record.
#[must_use]
pub fn visible_tasks(state: &BoardState, variant: Variant) -> Vec<&Task> {
    if variant.has_priority() {
        derive_view(&state.tasks, state.filter)
    } else {
        state.tasks.iter().collect()
    }
}

/// Everything a presentation layer renders after an intent
///
/// Serializes to JSON; fields that do not exist in the minimal variant are
/// omitted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    /// Records in the (possibly filtered) view, in order
    pub tasks: Vec<Task>,
    /// Pending title text
    pub pending_title: String,
    /// Pending priority (appointment variant)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_priority: Option<Priority>,
    /// Current filter selectors (appointment variant)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<ViewFilter>,
    /// Whether submitting the pending title would add a record
    pub can_submit: bool,
    /// Number of records in the whole collection
    pub total: usize,
    /// Number of completed records in the whole collection
    pub completed: usize,
    /// Number of open records in the whole collection
    pub active: usize,
}

impl BoardView {
    /// Project the current state into a view
    #[must_use]
    pub fn project(state: &BoardState, variant: Variant) -> Self {
        let has_priority = variant.has_priority();
        let completed = state.completed_count();

        Self {
            tasks: visible_tasks(state, variant).into_iter().cloned().collect(),
            pending_title: state.pending_title.clone(),
            pending_priority: has_priority.then_some(state.pending_priority),
            filter: has_priority.then_some(state.filter),
            can_submit: state.can_submit(),
            total: state.count(),
            completed,
            active: state.count() - completed,
        }
    }

    /// Identifiers of the visible records, in order
    #[must_use]
    pub fn ids(&self) -> Vec<u64> {
        self.tasks.iter().map(|t| t.id.get()).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code can unwrap
mod tests {
    use super::*;
    use crate::types::TaskId;

    fn task(id: u64, priority: Priority, completed: bool) -> Task {
        Task {
            id: TaskId::new(id),
            title: format!("Task {id}"),
            completed,
            priority: Some(priority),
        }
    }

    fn sample() -> Vec<Task> {
        vec![
            task(1, Priority::High, false),
            task(2, Priority::Medium, true),
            task(3, Priority::Low, false),
            task(4, Priority::High, true),
        ]
    }

    fn ids(view: &[&Task]) -> Vec<u64> {
        view.iter().map(|t| t.id.get()).collect()
    }

    #[test]
    fn all_all_is_full_collection_in_order() {
        let tasks = sample();
        assert_eq!(ids(&derive_view(&tasks, ViewFilter::ALL)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn priority_only() {
        let tasks = sample();
        let filter = ViewFilter::new(PriorityFilter::High, StatusFilter::All);
        assert_eq!(ids(&derive_view(&tasks, filter)), vec![1, 4]);
    }

    #[test]
    fn status_only() {
        let tasks = sample();
        let active = ViewFilter::new(PriorityFilter::All, StatusFilter::Active);
        let done = ViewFilter::new(PriorityFilter::All, StatusFilter::Completed);
        assert_eq!(ids(&derive_view(&tasks, active)), vec![1, 3]);
        assert_eq!(ids(&derive_view(&tasks, done)), vec![2, 4]);
    }

    #[test]
    fn both_selectors_are_anded() {
        let tasks = sample();
        let filter = ViewFilter::new(PriorityFilter::High, StatusFilter::Completed);
        assert_eq!(ids(&derive_view(&tasks, filter)), vec![4]);

        let filter = ViewFilter::new(PriorityFilter::Low, StatusFilter::Completed);
        assert!(derive_view(&tasks, filter).is_empty());
    }

    #[test]
    fn minimal_variant_ignores_filter() {
        let state = BoardState {
            tasks: sample(),
            filter: ViewFilter::new(PriorityFilter::Low, StatusFilter::Completed),
            ..BoardState::default()
        };
        assert_eq!(ids(&visible_tasks(&state, Variant::Minimal)), vec![1, 2, 3, 4]);
        assert!(visible_tasks(&state, Variant::Appointment).is_empty());
    }

    #[test]
    fn projection_counts_whole_collection() {
        let state = BoardState {
            tasks: sample(),
            filter: ViewFilter::new(PriorityFilter::High, StatusFilter::All),
            pending_title: "  ".to_string(),
            ..BoardState::default()
        };

        let view = BoardView::project(&state, Variant::Appointment);

        assert_eq!(view.ids(), vec![1, 4]);
        assert_eq!(view.total, 4);
        assert_eq!(view.completed, 2);
        assert_eq!(view.active, 2);
        assert!(!view.can_submit);
        assert_eq!(view.pending_priority, Some(Priority::Medium));
        assert_eq!(view.filter, Some(state.filter));
    }

    #[test]
    fn minimal_projection_omits_priority_fields() {
        let state = BoardState {
            tasks: vec![Task::new(TaskId::new(1), "Buy milk".to_string(), None)],
            last_id: 1,
            ..BoardState::default()
        };

        let json = serde_json::to_value(BoardView::project(&state, Variant::Minimal)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "tasks": [{"id": 1, "title": "Buy milk", "completed": false}],
                "pending_title": "",
                "can_submit": false,
                "total": 1,
                "completed": 0,
                "active": 1,
            })
        );
    }

    #[test]
    fn appointment_projection_serializes_selectors() {
        let state = BoardState {
            filter: ViewFilter::new(PriorityFilter::High, StatusFilter::Active),
            ..BoardState::default()
        };

        let json = serde_json::to_value(BoardView::project(&state, Variant::Appointment)).unwrap();

        assert_eq!(json["pending_priority"], "medium");
        assert_eq!(json["filter"], serde_json::json!({"priority": "high", "status": "active"}));
    }
}
