//! Node classification against semantic predicates.

use super::Prospector;
use crate::error::TraversalError;
use crate::model::Node;
use crate::store::TripleStore;
use crate::vocab::{Predicate, CHEBI_IDENTIFIERS_PREFIX, CHEBI_PURL_PREFIX, STRAIN_ROLE};

/// The semantic predicates a node can be classified against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassifyKind {
    /// A ModuleDefinition carrying the NCIT strain role.
    Strain,
    /// A definition whose sbol:type is in a CHEBI namespace.
    Reagent,
    /// A record marked as a placeholder stub in SD2 SynBioHub.
    Stub,
}

impl<S: TripleStore> Prospector<S> {
    /// Classify a node. Results are cached per (node, kind); a repeat call
    /// issues no store query.
    pub async fn classify(&mut self, node: &Node, kind: ClassifyKind) -> Result<bool, TraversalError> {
        let key = (node.clone(), kind);
        if let Some(cached) = self.classify_cache.get(&key) {
            return Ok(*cached);
        }
        let result = match kind {
            ClassifyKind::Strain => {
                self.triple_exists(node, Predicate::Role, &Node::new(STRAIN_ROLE))
                    .await?
            }
            ClassifyKind::Reagent => {
                let types = self.objects_for(node, Predicate::Type).await?;
                types.iter().any(|t| {
                    t.as_str().starts_with(CHEBI_PURL_PREFIX)
                        || t.as_str().starts_with(CHEBI_IDENTIFIERS_PREFIX)
                })
            }
            ClassifyKind::Stub => {
                // Only the literal string "true" marks a stub. Other values
                // of the marker do not.
                let values = self.objects_for(node, Predicate::Stub).await?;
                values.iter().any(|v| v.as_str() == "true")
            }
        };
        self.classify_cache.put(key, result);
        Ok(result)
    }

    /// True if the node carries the strain role. One existence check, no
    /// recursion.
    pub async fn is_strain(&mut self, node: &Node) -> Result<bool, TraversalError> {
        self.classify(node, ClassifyKind::Strain).await
    }

    /// True if any of the node's sbol:type values is a CHEBI term.
    pub async fn is_reagent(&mut self, node: &Node) -> Result<bool, TraversalError> {
        self.classify(node, ClassifyKind::Reagent).await
    }

    /// True if the node is marked as a stub object.
    pub async fn is_stub(&mut self, node: &Node) -> Result<bool, TraversalError> {
        self.classify(node, ClassifyKind::Stub).await
    }
}
