//! Error types for the task board.
//!
//! Board operations themselves never fail: blank titles and unknown ids are
//! ignored. The only fallible edge is turning text from a presentation layer
//! or the environment into typed selector values.

use thiserror::Error;

/// Failure to parse a selector value from text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Not one of `low`, `medium`, `high`
    #[error("Unknown priority `{0}` (expected low, medium or high)")]
    Priority(String),

    /// Not one of `all`, `low`, `medium`, `high`
    #[error("Unknown priority filter `{0}` (expected all, low, medium or high)")]
    PriorityFilter(String),

    /// Not one of `all`, `active`, `completed`
    #[error("Unknown status filter `{0}` (expected all, active or completed)")]
    StatusFilter(String),

    /// Not one of `minimal`, `appointment`
    #[error("Unknown board variant `{0}` (expected minimal or appointment)")]
    Variant(String),
}
