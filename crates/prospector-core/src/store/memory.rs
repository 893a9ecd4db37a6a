use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{Implementation, StoreError, TripleStore};
use crate::model::{Node, Triple, TriplePattern};
use crate::vocab::{Predicate, GROWTH_MEDIA_ROLE};

/// In-memory triple store.
///
/// Answers pattern queries by scanning a fixed triple list, preserving
/// insertion order. Counts queries so tests can verify that memoized
/// callers do not issue redundant round-trips.
#[derive(Default)]
pub struct MemoryStore {
    triples: Vec<Triple>,
    queries: AtomicUsize,
}

impl MemoryStore {
    pub fn new(triples: Vec<Triple>) -> Self {
        Self {
            triples,
            queries: AtomicUsize::new(0),
        }
    }

    /// Number of queries served so far (both pattern and implementation
    /// queries).
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    fn has(&self, subject: &Node, predicate: Predicate, object: &Node) -> bool {
        let predicate = predicate.node();
        self.triples
            .iter()
            .any(|t| t.subject == *subject && t.predicate == predicate && t.object == *object)
    }
}

#[async_trait]
impl TripleStore for MemoryStore {
    async fn query(&self, pattern: &TriplePattern) -> Result<Vec<Triple>, StoreError> {
        if pattern.is_unbound() {
            return Err(StoreError::UnsupportedPattern);
        }
        self.queries.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .triples
            .iter()
            .filter(|t| pattern.matches(t))
            .cloned()
            .collect())
    }

    async fn implementations(
        &self,
        object: &Node,
        media: Option<&Node>,
    ) -> Result<Vec<Implementation>, StoreError> {
        self.queries.fetch_add(1, Ordering::SeqCst);

        if let Some(media) = media {
            let media_role = Node::new(GROWTH_MEDIA_ROLE);
            let module_pred = Predicate::Module.node();
            let reaches_media = self
                .triples
                .iter()
                .filter(|t| t.subject == *object && t.predicate == module_pred)
                .any(|t| self.has(&t.object, Predicate::Definition, media));
            if !reaches_media || !self.has(media, Predicate::Role, &media_role) {
                return Ok(Vec::new());
            }
        }

        let built = Predicate::Built.node();
        let title = Predicate::Title.node();
        let mut implementations = Vec::new();
        for t in self.triples.iter().filter(|t| t.predicate == built && t.object == *object) {
            for tt in self
                .triples
                .iter()
                .filter(|tt| tt.subject == t.subject && tt.predicate == title)
            {
                implementations.push(Implementation {
                    uri: t.subject.clone(),
                    title: tt.object.as_str().to_string(),
                });
            }
        }
        Ok(implementations)
    }
}
