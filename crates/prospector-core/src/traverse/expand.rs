//! Containment expansion: stepping from a definition to the definitions
//! directly contained under it, via two-hop instantiation patterns.

use std::collections::HashSet;

use super::Prospector;
use crate::error::TraversalError;
use crate::model::Node;
use crate::store::{StoreError, TripleStore};
use crate::vocab::Predicate;

/// Which expansion rules apply when walking down the containment hierarchy.
///
/// Each rule is a two-hop pattern: node —instantiation-predicate→ instance
/// —definition→ child. Callers pick the rule set; the expander never
/// decides on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleSet {
    /// Module children only: node —module→ M —definition→ D.
    Modules,
    /// Module children plus component children found via either a
    /// FunctionalComponent or a Component instantiation.
    ModulesAndComponents,
}

impl RuleSet {
    fn hops(&self) -> &'static [Predicate] {
        match self {
            RuleSet::Modules => &[Predicate::Module],
            RuleSet::ModulesAndComponents => &[
                Predicate::Module,
                Predicate::FunctionalComponent,
                Predicate::Component,
            ],
        }
    }
}

impl<S: TripleStore> Prospector<S> {
    /// Definitions directly contained under `node` per the given rule set,
    /// all applicable rules unioned, duplicates removed, discovery order
    /// preserved. Memoized per (node, rules).
    pub async fn children(&mut self, node: &Node, rules: RuleSet) -> Result<Vec<Node>, TraversalError> {
        let key = (node.clone(), rules);
        if let Some(cached) = self.children_cache.get(&key) {
            return Ok(cached.clone());
        }

        let mut children = Vec::new();
        let mut seen = HashSet::new();
        for hop in rules.hops() {
            for child in self.two_hop_children(node, *hop).await? {
                if seen.insert(child.clone()) {
                    children.push(child);
                }
            }
        }

        self.children_cache.put(key, children.clone());
        Ok(children)
    }

    /// node —hop→ instance —definition→ child, for every instance.
    async fn two_hop_children(
        &self,
        node: &Node,
        hop: Predicate,
    ) -> Result<Vec<Node>, StoreError> {
        let mut children = Vec::new();
        for instance in self.objects_for(node, hop).await? {
            children.extend(self.objects_for(&instance, Predicate::Definition).await?);
        }
        Ok(children)
    }

    /// Module definitions directly containing `node`: one level up, via
    /// either a Module or a FunctionalComponent instantiation. Memoized.
    pub async fn parent_module_definitions(
        &mut self,
        node: &Node,
    ) -> Result<Vec<Node>, TraversalError> {
        if let Some(cached) = self.parents_cache.get(node) {
            return Ok(cached.clone());
        }

        let mut parents = Vec::new();
        let mut seen = HashSet::new();
        let instances = self.subjects_for(Predicate::Definition, node).await?;
        for hop in [Predicate::Module, Predicate::FunctionalComponent] {
            for instance in &instances {
                for parent in self.subjects_for(hop, instance).await? {
                    if seen.insert(parent.clone()) {
                        parents.push(parent);
                    }
                }
            }
        }

        self.parents_cache.put(node.clone(), parents.clone());
        Ok(parents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Triple;
    use crate::store::MemoryStore;

    fn prospector(triples: Vec<Triple>) -> Prospector<MemoryStore> {
        Prospector::new(MemoryStore::new(triples))
    }

    fn contains(parent: &str, hop: Predicate, instance: &str, child: &str) -> [Triple; 2] {
        [
            Triple::new(parent, hop.node(), instance),
            Triple::new(instance, Predicate::Definition.node(), child),
        ]
    }

    #[tokio::test]
    async fn test_module_children() {
        let mut triples = Vec::new();
        triples.extend(contains("urn:root", Predicate::Module, "urn:m1", "urn:child1"));
        triples.extend(contains("urn:root", Predicate::FunctionalComponent, "urn:fc1", "urn:child2"));
        let mut p = prospector(triples);

        let root = Node::new("urn:root");
        // Module-only rules ignore the functionalComponent hop
        let children = p.children(&root, RuleSet::Modules).await.unwrap();
        assert_eq!(children, vec![Node::new("urn:child1")]);
    }

    #[tokio::test]
    async fn test_component_children_union_both_hops() {
        let mut triples = Vec::new();
        triples.extend(contains("urn:root", Predicate::FunctionalComponent, "urn:fc1", "urn:cd1"));
        triples.extend(contains("urn:root", Predicate::Component, "urn:c1", "urn:cd2"));
        // Same child reachable via both hops dedupes
        triples.push(Triple::new("urn:c1", Predicate::Definition.node(), "urn:cd1"));
        let mut p = prospector(triples);

        let root = Node::new("urn:root");
        let children = p.children(&root, RuleSet::ModulesAndComponents).await.unwrap();
        assert_eq!(children, vec![Node::new("urn:cd1"), Node::new("urn:cd2")]);
    }

    #[tokio::test]
    async fn test_children_memoized_per_rule_set() {
        let mut p = prospector(contains("urn:root", Predicate::Module, "urn:m1", "urn:child1").to_vec());
        let root = Node::new("urn:root");

        p.children(&root, RuleSet::Modules).await.unwrap();
        let after_first = p.store().query_count();
        p.children(&root, RuleSet::Modules).await.unwrap();
        assert_eq!(p.store().query_count(), after_first);

        // A different rule set is a different cache entry
        p.children(&root, RuleSet::ModulesAndComponents).await.unwrap();
        assert!(p.store().query_count() > after_first);
    }

    #[tokio::test]
    async fn test_parent_module_definitions() {
        let triples = vec![
            // parent --module--> instance --definition--> child
            Triple::new("urn:parent", Predicate::Module.node(), "urn:m1"),
            Triple::new("urn:m1", Predicate::Definition.node(), "urn:child"),
            // other --functionalComponent--> instance2 --definition--> child
            Triple::new("urn:other", Predicate::FunctionalComponent.node(), "urn:fc1"),
            Triple::new("urn:fc1", Predicate::Definition.node(), "urn:child"),
        ];
        let mut p = prospector(triples);

        let mut parents = p
            .parent_module_definitions(&Node::new("urn:child"))
            .await
            .unwrap();
        parents.sort();
        assert_eq!(parents, vec![Node::new("urn:other"), Node::new("urn:parent")]);
    }
}
