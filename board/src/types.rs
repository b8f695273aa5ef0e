//! Domain types for the task board.
//!
//! A board is an ordered list of short text records. In the appointment
//! variant each record also carries a priority and the list can be viewed
//! through a priority filter and a completion-status filter.

use crate::error::ParseError;
use crate::view::ViewFilter;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use taskboard_macros::Action;

/// Unique identifier for a task
///
/// Assigned by the board, strictly increasing, never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Creates a `TaskId` from its numeric value
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the numeric value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Priority of an appointment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Low priority
    Low,
    /// Medium priority (default for new records)
    #[default]
    Medium,
    /// High priority
    High,
}

impl Priority {
    /// All priorities, lowest first
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Lowercase name, as used on the wire
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParseError::Priority(s.to_string())),
        }
    }
}

/// Which priorities the view admits
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityFilter {
    /// Every priority
    #[default]
    All,
    /// Only low priority
    Low,
    /// Only medium priority
    Medium,
    /// Only high priority
    High,
}

impl PriorityFilter {
    /// Filter admitting only `priority`
    #[must_use]
    pub const fn only(priority: Priority) -> Self {
        match priority {
            Priority::Low => Self::Low,
            Priority::Medium => Self::Medium,
            Priority::High => Self::High,
        }
    }

    /// Returns true if a record with `priority` passes this filter
    ///
    /// A record without a priority only passes [`PriorityFilter::All`].
    #[must_use]
    pub fn admits(self, priority: Option<Priority>) -> bool {
        match self {
            Self::All => true,
            Self::Low => priority == Some(Priority::Low),
            Self::Medium => priority == Some(Priority::Medium),
            Self::High => priority == Some(Priority::High),
        }
    }

    /// Lowercase name, as used on the wire
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for PriorityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriorityFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<Priority>()
            .map(Self::only)
            .map_err(|_| ParseError::PriorityFilter(s.to_string()))
    }
}

/// Which completion states the view admits
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// Both open and completed records
    #[default]
    All,
    /// Only records not yet completed
    Active,
    /// Only completed records
    Completed,
}

impl StatusFilter {
    /// Returns true if a record with the given completion flag passes
    #[must_use]
    pub const fn admits(self, completed: bool) -> bool {
        match self {
            Self::All => true,
            Self::Active => !completed,
            Self::Completed => completed,
        }
    }

    /// Lowercase name, as used on the wire
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseError::StatusFilter(s.to_string())),
        }
    }
}

/// Component flavour
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Plain task list: no priorities, no filtering
    Minimal,
    /// Appointments with priorities and two-dimensional filtering
    #[default]
    Appointment,
}

impl Variant {
    /// Returns true if records carry a priority and the view can be filtered
    #[must_use]
    pub const fn has_priority(self) -> bool {
        matches!(self, Self::Appointment)
    }

    /// Lowercase name, as used in configuration
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Appointment => "appointment",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimal" => Ok(Self::Minimal),
            "appointment" => Ok(Self::Appointment),
            _ => Err(ParseError::Variant(s.to_string())),
        }
    }
}

/// A single task or appointment
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,
    /// Trimmed, non-empty title
    pub title: String,
    /// Whether the task is completed
    pub completed: bool,
    /// Priority (appointment variant only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl Task {
    /// Creates a new open task
    #[must_use]
    pub const fn new(id: TaskId, title: String, priority: Option<Priority>) -> Self {
        Self {
            id,
            title,
            completed: false,
            priority,
        }
    }
}

/// State of one board instance
///
/// Owns the ordered record collection, the identifier counter, the pending
/// (not yet submitted) input and the current filter selectors.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    /// All live records, in insertion order
    pub(crate) tasks: Vec<Task>,
    /// Highest identifier ever assigned; 0 before the first add
    pub(crate) last_id: u64,
    /// Title text typed but not yet submitted
    pub pending_title: String,
    /// Priority picked for the next record
    pub pending_priority: Priority,
    /// Current filter selectors
    pub filter: ViewFilter,
}

impl BoardState {
    /// Creates an empty board with default pending input and filters
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All live records, in insertion order
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Highest identifier ever assigned; 0 before the first add
    #[must_use]
    pub const fn last_id(&self) -> u64 {
        self.last_id
    }

    /// Returns the number of records
    #[must_use]
    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    /// Returns the number of completed records
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    /// Returns the number of open records
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.count() - self.completed_count()
    }

    /// Returns a record by ID
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Returns a mutable record by ID
    pub(crate) fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Checks if a record exists
    #[must_use]
    pub fn exists(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }

    /// The identifier the next successful add will receive
    ///
    /// `None` once the identifier space is exhausted.
    #[must_use]
    pub const fn next_id(&self) -> Option<TaskId> {
        match self.last_id.checked_add(1) {
            Some(id) => Some(TaskId(id)),
            None => None,
        }
    }

    /// Returns true if submitting the pending title would add a record
    ///
    /// A presentation layer can use this to disable its submit control.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.pending_title.trim().is_empty()
    }
}

/// Actions representing intents and events for the board
///
/// Intents are raised by the presentation layer or a library caller and are
/// validated by the reducer. Accepted intents produce events, which are then
/// applied to state. Rejected intents (blank title, unknown id, priority
/// operations on a minimal board) change nothing and produce no event.
#[derive(Action, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardAction {
    // ========== Intents ==========
    /// Intent: Replace the pending title text
    #[intent]
    SetPendingTitle {
        /// Text as typed, untrimmed
        text: String,
    },

    /// Intent: Pick the priority for the next record
    #[intent]
    SetPendingPriority {
        /// Priority to use
        priority: Priority,
    },

    /// Intent: Add a record from the pending title and priority
    #[intent]
    SubmitAdd,

    /// Intent: Add a record directly
    #[intent]
    AddTask {
        /// Title, trimmed before validation
        title: String,
        /// Priority; the configured default when `None`
        priority: Option<Priority>,
    },

    /// Intent: Flip a record's completion flag
    #[intent]
    ToggleCompletion {
        /// Record to toggle
        id: TaskId,
    },

    /// Intent: Delete a record
    #[intent]
    RemoveTask {
        /// Record to delete
        id: TaskId,
    },

    /// Intent: Change a record's priority
    #[intent]
    ChangePriority {
        /// Record to change
        id: TaskId,
        /// New priority
        priority: Priority,
    },

    /// Intent: Select the priority filter
    #[intent]
    SetPriorityFilter {
        /// New selector value
        filter: PriorityFilter,
    },

    /// Intent: Select the status filter
    #[intent]
    SetStatusFilter {
        /// New selector value
        filter: StatusFilter,
    },

    // ========== Events ==========
    /// Event: A record was appended
    #[event]
    TaskAdded {
        /// The new record
        task: Task,
    },

    /// Event: A record's completion flag changed
    #[event]
    CompletionToggled {
        /// Record identifier
        id: TaskId,
        /// Resulting completion flag
        completed: bool,
    },

    /// Event: A record was deleted
    #[event]
    TaskRemoved {
        /// Record identifier
        id: TaskId,
    },

    /// Event: A record's priority changed
    #[event]
    PriorityChanged {
        /// Record identifier
        id: TaskId,
        /// Resulting priority
        priority: Priority,
    },
}
