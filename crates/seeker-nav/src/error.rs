use seeker_core::Cell;
use thiserror::Error;

/// Caller contract violations detected at the navigation boundary.
///
/// Search itself never fails; these only come out of constructors and explicit
/// validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("grid must be non-empty, got {width}x{height}")]
    EmptyGrid { width: i64, height: i64 },

    #[error("cell {cell} is outside the {width}x{height} grid")]
    OutOfBounds { cell: Cell, width: i32, height: i32 },

    #[error("agent body must contain at least one cell")]
    EmptyBody,
}

pub type Result<T> = std::result::Result<T, NavError>;
