//! Task board: an in-memory task and appointment list.
//!
//! A board owns an ordered collection of short text records. Each record can
//! be added, toggled complete, deleted and (in the appointment variant) given
//! a priority. The appointment variant also shows the collection through a
//! priority filter and a completion-status filter.
//!
//! Everything runs through the reducer architecture:
//!
//! - Intents (`BoardAction::AddTask`, `ToggleCompletion`, ...) are validated
//! - Accepted intents produce events, which are applied to `BoardState`
//! - Rejected intents (blank title, unknown id) are silent no-ops
//! - `BoardView` is projected from state on every read
//!
//! # Quick Start
//!
//! ```
//! use taskboard::{new_store, view, BoardAction, BoardConfig, Priority, TaskId};
//!
//! # fn main() -> Result<(), taskboard_runtime::StoreError> {
//! let mut store = new_store(BoardConfig::default());
//!
//! store.send(BoardAction::AddTask {
//!     title: "Buy milk".to_string(),
//!     priority: Some(Priority::High),
//! })?;
//! store.send(BoardAction::ToggleCompletion { id: TaskId::new(1) })?;
//!
//! let view = view(&store);
//! assert_eq!(view.total, 1);
//! assert_eq!(view.completed, 1);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod reducer;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use config::BoardConfig;
pub use error::ParseError;
pub use reducer::{BoardEnvironment, BoardReducer};
pub use types::{
    BoardAction, BoardState, Priority, PriorityFilter, StatusFilter, Task, TaskId, Variant,
};
pub use view::{derive_view, BoardView, ViewFilter};

use taskboard_runtime::Store;

/// Store running one board
pub type BoardStore = Store<BoardState, BoardAction, BoardEnvironment, BoardReducer>;

/// Creates a store holding an empty board configured by `config`
#[must_use]
pub fn new_store(config: BoardConfig) -> BoardStore {
    Store::new(
        config.initial_state(),
        BoardReducer::new(),
        BoardEnvironment::new(config),
    )
}

/// Projects the store's current state into a view
#[must_use]
pub fn view(store: &BoardStore) -> BoardView {
    let variant = store.environment().config.variant;
    store.state(|state| BoardView::project(state, variant))
}
