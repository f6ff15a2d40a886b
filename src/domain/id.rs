//! Task identifiers
//!
//! Task IDs are positive integers assigned by the store, starting at 1.
//! A deleted task's ID is never handed out again, so an ID names the same
//! task for the whole life of a store.

use serde::Serialize;
use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("Invalid ID format: expected a positive integer, got '{0}'")]
    InvalidTaskId(String),
}

/// Identifier of a single task, unique within one store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TaskId(NonZeroU64);

impl TaskId {
    /// The ID assigned to the first task created in a store
    pub const FIRST: Self = Self(NonZeroU64::MIN);

    /// Creates a task ID from a raw counter value; zero is not an ID
    pub fn new(raw: u64) -> Option<Self> {
        NonZeroU64::new(raw).map(Self)
    }

    /// Returns the numeric value of the ID
    pub fn value(&self) -> u64 {
        self.0.get()
    }

    /// Returns the ID a subsequent creation would receive
    pub fn next(&self) -> Self {
        // Counter is a u64 starting at 1; saturating keeps this infallible.
        Self(self.0.checked_add(1).unwrap_or(self.0))
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        s.parse::<NonZeroU64>()
            .map(Self)
            .map_err(|_| IdError::InvalidTaskId(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_integers() {
        let id: TaskId = "42".parse().unwrap();
        assert_eq!(id.value(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let id: TaskId = "  7 ".parse().unwrap();
        assert_eq!(id.value(), 7);
    }

    #[test]
    fn rejects_zero() {
        let err = "0".parse::<TaskId>().unwrap_err();
        assert_eq!(err, IdError::InvalidTaskId("0".to_string()));
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert!("abc".parse::<TaskId>().is_err());
        assert!("-3".parse::<TaskId>().is_err());
        assert!("1.5".parse::<TaskId>().is_err());
        assert!("".parse::<TaskId>().is_err());
    }

    #[test]
    fn next_increments_by_one() {
        let id = TaskId::new(1).unwrap();
        assert_eq!(id.next().value(), 2);
    }

    #[test]
    fn ids_order_numerically() {
        let a = TaskId::new(2).unwrap();
        let b = TaskId::new(10).unwrap();
        assert!(a < b);
    }
}
