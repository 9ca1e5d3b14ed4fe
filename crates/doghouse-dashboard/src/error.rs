//! Error types for the doghouse-dashboard crate.

use thiserror::Error;

/// Errors that can occur while composing a dashboard document.
///
/// Every variant is a fail-fast construction error: the crate performs no
/// I/O and nothing here is retryable.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// A query specification has the wrong shape (empty, duplicate names,
    /// blank expressions).
    #[error("invalid query spec: {reason}")]
    InvalidQuery {
        /// The reason the query spec is invalid.
        reason: String,
    },

    /// A layout cell has a zero width or height.
    #[error("invalid layout cell: {reason}")]
    InvalidCell {
        /// The reason the cell is invalid.
        reason: String,
    },

    /// A row declaration violates the grid rules (zero height, more
    /// widgets than the column capacity).
    #[error("invalid row: {reason}")]
    InvalidRow {
        /// The reason the row is invalid.
        reason: String,
    },

    /// A group widget's children do not match its internal layout mode.
    #[error("invalid group: {reason}")]
    InvalidGroup {
        /// The reason the group is invalid.
        reason: String,
    },

    /// The document's layout type and its widgets' coordinate presence
    /// disagree (grid widget without a cell, ordered widget with one).
    #[error("layout mismatch: {reason}")]
    LayoutMismatch {
        /// The reason the layout cross-check failed.
        reason: String,
    },
}

/// Result type for dashboard composition operations.
pub type Result<T> = std::result::Result<T, DashboardError>;
