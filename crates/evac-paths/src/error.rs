use evac_core::GridError;

/// Errors raised by [`find_path`](crate::find_path) and friends.
///
/// An unreachable goal is not an error; searches report it as `None`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    /// Start or goal outside the grid.
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("unknown algorithm {0:?}")]
    UnknownAlgorithm(String),
}
