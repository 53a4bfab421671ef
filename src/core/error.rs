// ============================================================================
// chore-list - Errors
// ============================================================================

use thiserror::Error;

use super::types::Action;

pub type ListResult<T> = Result<T, ListError>;

/// Errors surfaced by [`ReactiveList`](crate::ReactiveList) operations.
///
/// Every operation is all-or-nothing with respect to the backing sequence:
/// construction and bounds errors happen before anything is touched, and an
/// observer failure is reported after the mutation has committed.
#[derive(Debug, Error)]
pub enum ListError {
    /// The builder was finished without an observer.
    #[error("observer callback is missing or not invocable")]
    InvalidCallback,

    /// An index fell outside the valid range for the operation.
    #[error("index {index} out of bounds for list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A signed position was negative.
    #[error("negative index {index} out of bounds for list of length {len}")]
    NegativeIndex { index: isize, len: usize },

    /// The observer returned an error. The mutation it was told about is
    /// already applied and stays applied.
    #[error("observer failed while handling `{action}` notification")]
    Observer {
        action: Action,
        #[source]
        source: anyhow::Error,
    },
}

impl ListError {
    pub(crate) fn out_of_bounds(index: usize, len: usize) -> Self {
        ListError::IndexOutOfBounds { index, len }
    }

    /// True for both bounds error kinds.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(
            self,
            ListError::IndexOutOfBounds { .. } | ListError::NegativeIndex { .. }
        )
    }

    /// True when the observer failed after a committed mutation.
    pub fn is_observer_failure(&self) -> bool {
        matches!(self, ListError::Observer { .. })
    }
}

// =============================================================================
// VALIDATION ERROR
// =============================================================================

/// Rejections from [`validate_text`](crate::validate_text).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("chore cannot be empty")]
    Empty,

    #[error("chore cannot be longer than {max} characters (got {len})")]
    TooLong { len: usize, max: usize },
}

// =============================================================================
// TESTS
// =============================================================================
