//! Graph traversal over a remote SBOL object graph.
//!
//! [`Prospector`] is the traversal context: it owns the triple store
//! collaborator and the memoization caches, so every run (and every test)
//! gets fresh cache state. The engine never mutates the remote graph and
//! assumes it is stable for the lifetime of the context.
//!
//! # Components
//!
//! - [`classify`](Prospector::classify) - strain / reagent / stub checks
//! - [`children`](Prospector::children) - two-hop containment expansion
//! - [`find_contained`](Prospector::find_contained) - memoized worklist BFS
//! - [`find_construct_experiments`](Prospector::find_construct_experiments) -
//!   pathfinding join from a construct to its implementation records

mod classify;
mod expand;
mod experiments;
mod walk;

pub use classify::ClassifyKind;
pub use expand::RuleSet;
pub use experiments::{ExperimentRow, ExperimentTable};

use lru::LruCache;
use std::num::NonZeroUsize;
use tracing::info;

use crate::config::DEFAULT_CACHE_CAPACITY;
use crate::model::{Node, TriplePattern};
use crate::store::{StoreError, TripleStore};
use crate::vocab::Predicate;
use walk::WalkKey;

/// Traversal context over a triple store.
///
/// All traversal entry points memoize through LRU caches owned by this
/// struct; repeated calls with identical arguments return cached results
/// without further round-trips. Single traversal thread by design: the
/// caches are not shared.
pub struct Prospector<S: TripleStore> {
    store: S,
    classify_cache: LruCache<(Node, ClassifyKind), bool>,
    children_cache: LruCache<(Node, RuleSet), Vec<Node>>,
    parents_cache: LruCache<Node, Vec<Node>>,
    walk_cache: LruCache<WalkKey, Vec<Node>>,
}

impl<S: TripleStore> Prospector<S> {
    /// Creates a traversal context with the default cache capacity.
    pub fn new(store: S) -> Self {
        Self::with_cache_capacity(store, DEFAULT_CACHE_CAPACITY)
    }

    /// Creates a traversal context with a specific per-cache capacity.
    /// A zero capacity is clamped to one entry.
    pub fn with_cache_capacity(store: S, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            store,
            classify_cache: LruCache::new(capacity),
            children_cache: LruCache::new(capacity),
            parents_cache: LruCache::new(capacity),
            walk_cache: LruCache::new(capacity),
        }
    }

    /// The underlying triple store.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub(crate) async fn subjects_for(
        &self,
        predicate: Predicate,
        object: &Node,
    ) -> Result<Vec<Node>, StoreError> {
        let pattern = TriplePattern::subjects_of(predicate.node(), object.clone());
        let triples = self.store.query(&pattern).await?;
        Ok(triples.into_iter().map(|t| t.subject).collect())
    }

    pub(crate) async fn objects_for(
        &self,
        subject: &Node,
        predicate: Predicate,
    ) -> Result<Vec<Node>, StoreError> {
        let pattern = TriplePattern::objects_of(subject.clone(), predicate.node());
        let triples = self.store.query(&pattern).await?;
        Ok(triples.into_iter().map(|t| t.object).collect())
    }

    pub(crate) async fn triple_exists(
        &self,
        subject: &Node,
        predicate: Predicate,
        object: &Node,
    ) -> Result<bool, StoreError> {
        info!("Querying for {} {} {}", subject, predicate.uri(), object);
        let pattern = TriplePattern::exact(subject.clone(), predicate.node(), object.clone());
        let triples = self.store.query(&pattern).await?;
        Ok(!triples.is_empty())
    }

    /// The dcterms:title of a subject, or the empty string if it has none.
    pub async fn title_for(&self, subject: &Node) -> Result<String, StoreError> {
        let titles = self.objects_for(subject, Predicate::Title).await?;
        Ok(titles
            .into_iter()
            .next()
            .map(Node::into_string)
            .unwrap_or_default())
    }

    /// All (predicate, object) pairs describing a subject.
    pub async fn subject_info(&self, subject: &Node) -> Result<Vec<(Node, Node)>, StoreError> {
        let triples = self.store.query(&TriplePattern::about(subject.clone())).await?;
        Ok(triples.into_iter().map(|t| (t.predicate, t.object)).collect())
    }

    /// Members of an SBOL collection.
    pub async fn collection_members(&self, collection: &Node) -> Result<Vec<Node>, StoreError> {
        self.objects_for(collection, Predicate::Member).await
    }
}
