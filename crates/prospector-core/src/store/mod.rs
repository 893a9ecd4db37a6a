//! Triple store collaborators.
//!
//! The traversal engine only ever talks to a [`TripleStore`]: pattern-matched
//! triple queries plus one fixed multi-clause query for implementation
//! records. [`SynBioHubClient`] adapts a live SynBioHub SPARQL endpoint;
//! [`MemoryStore`] serves tests and offline use.

mod error;
mod memory;
mod sparql;
mod synbiohub;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use synbiohub::SynBioHubClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::model::{Node, Triple, TriplePattern};

/// An implementation record: a subject linked to a design via `sbol:built`,
/// with its title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Implementation {
    pub uri: Node,
    pub title: String,
}

/// A read-only RDF graph answering pattern-matched triple queries.
///
/// Authentication, pooling, and pagination are the implementor's concern.
/// The remote graph is assumed immutable for the lifetime of a traversal,
/// so callers may cache results freely.
#[async_trait]
pub trait TripleStore: Send + Sync {
    /// All triples matching the bound positions of `pattern`.
    ///
    /// An empty result is a valid outcome, never an error. Fully unbound
    /// patterns are rejected with [`StoreError::UnsupportedPattern`].
    async fn query(&self, pattern: &TriplePattern) -> Result<Vec<Triple>, StoreError>;

    /// Subjects linked to `object` via `sbol:built`, with their titles.
    ///
    /// With `media` set, only implementations whose built object reaches the
    /// given media definition through a module instantiation are returned,
    /// and the media definition must carry the growth-media role.
    async fn implementations(
        &self,
        object: &Node,
        media: Option<&Node>,
    ) -> Result<Vec<Implementation>, StoreError>;
}

/// Blanket implementation for boxed trait objects.
#[async_trait]
impl TripleStore for Box<dyn TripleStore> {
    async fn query(&self, pattern: &TriplePattern) -> Result<Vec<Triple>, StoreError> {
        (**self).query(pattern).await
    }

    async fn implementations(
        &self,
        object: &Node,
        media: Option<&Node>,
    ) -> Result<Vec<Implementation>, StoreError> {
        (**self).implementations(object, media).await
    }
}
