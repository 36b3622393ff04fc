//! Error handling for ShapeKit
//!
//! Two kinds of failure exist in the editor core:
//! - Precondition errors: the selection does not allow the requested grouping
//!   operation. These are reported to the user and abort with no state change.
//! - Lookup misses: an id no longer resolves to a live entity. These are skipped
//!   by the engine and never surface as errors.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Grouping precondition error type
///
/// Every variant is recoverable. The operation that produced it has not
/// modified the scene.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GroupingError {
    /// Fewer ids are selected than the operation needs
    #[error("Select at least {required} items to create a group (selected {found})")]
    TooFewSelected {
        /// Minimum number of selected ids.
        required: usize,
        /// Number of ids actually selected.
        found: usize,
    },

    /// A new group needs at least two shapes that are not grouped yet
    #[error("Select at least 2 ungrouped shapes to create a group (found {found})")]
    NotEnoughUngrouped {
        /// Number of ungrouped shapes in the selection.
        found: usize,
    },

    /// Every implicated shape already belongs to the target group
    #[error("Nothing to add: every selected shape already belongs to group {group_id}")]
    NothingToAdd {
        /// The group that would have received the shapes.
        group_id: u64,
    },

    /// Ungroup requires the selection to be exactly one live group
    #[error("Select exactly one group to ungroup (selected {selected} items)")]
    NotASingleGroup {
        /// Number of ids in the selection.
        selected: usize,
    },

    /// The target group does not exist
    #[error("Group {group_id} does not exist")]
    UnknownGroup {
        /// The id that failed to resolve.
        group_id: u64,
    },
}

/// Main error type for ShapeKit
///
/// A unified error type for the public editor API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Grouping precondition error
    #[error(transparent)]
    Grouping(#[from] GroupingError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this error is a user-facing precondition violation
    pub fn is_precondition(&self) -> bool {
        matches!(self, Error::Grouping(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping_error_display() {
        let err = GroupingError::TooFewSelected {
            required: 2,
            found: 1,
        };
        assert_eq!(
            err.to_string(),
            "Select at least 2 items to create a group (selected 1)"
        );

        let err = GroupingError::NothingToAdd { group_id: 7 };
        assert_eq!(
            err.to_string(),
            "Nothing to add: every selected shape already belongs to group 7"
        );

        let err = GroupingError::NotASingleGroup { selected: 3 };
        assert_eq!(
            err.to_string(),
            "Select exactly one group to ungroup (selected 3 items)"
        );
    }

    #[test]
    fn test_error_conversion() {
        let err: Error = GroupingError::NotEnoughUngrouped { found: 1 }.into();
        assert!(err.is_precondition());
        assert!(matches!(err, Error::Grouping(_)));

        let other = Error::other("boom");
        assert!(!other.is_precondition());
        assert_eq!(other.to_string(), "boom");
    }
}
