//! Errors reported by matroid trackers.
//!
//! Queries never fail. Mutators, and [`can_swap`](crate::Matroid::can_swap) which
//! names a tracked element, report broken preconditions as a [`MatroidError`]
//! instead of corrupting the tracked set.
use crate::matroid::Element;
use thiserror::Error;

/// Represents an error that occurred while building or driving a matroid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatroidError {
    /// The constraint parameters are invalid, for instance a negative cardinality bound.
    #[error("invalid argument: cardinality bound must be non-negative, got {0}")]
    InvalidArgument(i32),
    /// The caller did not respect the contract of an operation.
    /// The tracked set is left unchanged.
    #[error("precondition violated: {0}")]
    PreconditionViolation(#[from] Violation),
}

/// The precondition that was broken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    /// [`add`](crate::Matroid::add) was called while [`can_add`](crate::Matroid::can_add) was false
    #[error("cannot add element {element}: the current set already holds {k} elements")]
    CannotAdd {
        /// The rejected element
        element: Element,
        /// The cardinality bound that was reached
        k: usize,
    },
    /// The element is expected to be in the current set but is not
    #[error("element {element} is not in the current set")]
    NotInCurrent {
        /// The missing element
        element: Element,
    },
}

/// Result type for matroid operations
pub type MatroidResult<T> = Result<T, MatroidError>;
