//! Configuration for a board instance.
//!
//! Loads configuration from environment variables with sensible defaults.

use crate::types::{BoardState, Priority, PriorityFilter, StatusFilter, Variant};
use crate::view::ViewFilter;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Display;
use std::str::FromStr;

/// Environment variable selecting the variant (`minimal` or `appointment`)
pub const VARIANT_VAR: &str = "TASKBOARD_VARIANT";
/// Environment variable for the default priority of new records
pub const DEFAULT_PRIORITY_VAR: &str = "TASKBOARD_DEFAULT_PRIORITY";
/// Environment variable for the initial priority filter
pub const PRIORITY_FILTER_VAR: &str = "TASKBOARD_PRIORITY_FILTER";
/// Environment variable for the initial status filter
pub const STATUS_FILTER_VAR: &str = "TASKBOARD_STATUS_FILTER";

/// Board configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Component flavour. `minimal` records carry no priority, and priority
    /// and filter intents are ignored. Default: `appointment`
    pub variant: Variant,
    /// Priority given to a new record when the caller does not choose one,
    /// and the value the pending priority resets to after a successful add.
    /// Default: `medium`
    pub default_priority: Priority,
    /// Priority selector in effect when the board is created. Default: `all`
    pub default_priority_filter: PriorityFilter,
    /// Status selector in effect when the board is created. Default: `all`
    pub default_status_filter: StatusFilter,
}

impl BoardConfig {
    /// Load configuration from environment variables.
    ///
    /// Missing or unparsable values fall back to their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            variant: parse_or(&lookup, VARIANT_VAR, defaults.variant),
            default_priority: parse_or(&lookup, DEFAULT_PRIORITY_VAR, defaults.default_priority),
            default_priority_filter: parse_or(
                &lookup,
                PRIORITY_FILTER_VAR,
                defaults.default_priority_filter,
            ),
            default_status_filter: parse_or(
                &lookup,
                STATUS_FILTER_VAR,
                defaults.default_status_filter,
            ),
        }
    }

    /// Filter selectors a fresh board starts with
    ///
    /// A minimal board never filters, whatever is configured.
    #[must_use]
    pub const fn initial_filter(&self) -> ViewFilter {
        if self.variant.has_priority() {
            ViewFilter::new(self.default_priority_filter, self.default_status_filter)
        } else {
            ViewFilter::ALL
        }
    }

    /// An empty board with pending input and filters at their configured
    /// defaults
    #[must_use]
    pub fn initial_state(&self) -> BoardState {
        BoardState {
            pending_priority: self.default_priority,
            filter: self.initial_filter(),
            ..BoardState::default()
        }
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.parse().unwrap_or_else(|error| {
            tracing::warn!(key, %error, "Ignoring invalid configuration value");
            default
        }),
    }
}
