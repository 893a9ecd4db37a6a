//! Traversal error types.

use thiserror::Error;

use crate::model::Node;
use crate::store::StoreError;

/// Errors that can occur while traversing the remote graph.
#[derive(Debug, Error)]
pub enum TraversalError {
    /// Two independent chains reached the same node during a pathfinding
    /// join. The join requires a strict tree; this aborts the traversal.
    #[error("Two paths to {0}")]
    AmbiguousPath(Node),

    /// The triple store collaborator failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}
