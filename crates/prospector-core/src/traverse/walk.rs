//! Worklist BFS over the containment hierarchy, in both directions.

use std::collections::{HashSet, VecDeque};

use super::{ClassifyKind, Prospector, RuleSet};
use crate::error::TraversalError;
use crate::model::Node;
use crate::store::TripleStore;

/// Cache key for a memoized walk.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum WalkKey {
    Contained(Node, ClassifyKind, RuleSet),
    Roots(Node),
}

impl<S: TripleStore> Prospector<S> {
    /// Breadth-first search down the containment hierarchy from `root`,
    /// collecting every reachable node that satisfies `kind`, in BFS
    /// discovery order. Memoized per (root, kind, rules).
    ///
    /// A visited set deduplicates enqueued nodes, so walks terminate on
    /// cyclic graphs and report a diamond-reachable node once.
    pub async fn find_contained(
        &mut self,
        root: &Node,
        kind: ClassifyKind,
        rules: RuleSet,
    ) -> Result<Vec<Node>, TraversalError> {
        let key = WalkKey::Contained(root.clone(), kind, rules);
        if let Some(cached) = self.walk_cache.get(&key) {
            return Ok(cached.clone());
        }

        let mut found = Vec::new();
        let mut queue = VecDeque::from([root.clone()]);
        let mut seen = HashSet::from([root.clone()]);
        while let Some(node) = queue.pop_front() {
            if self.classify(&node, kind).await? {
                found.push(node.clone());
            }
            for child in self.children(&node, rules).await? {
                if seen.insert(child.clone()) {
                    queue.push_back(child);
                }
            }
        }

        self.walk_cache.put(key, found.clone());
        Ok(found)
    }

    /// Walk down the hierarchy of ModuleDefinitions finding strains.
    /// Strains only live under modules, so component expansion is skipped.
    pub async fn find_contained_strains(&mut self, root: &Node) -> Result<Vec<Node>, TraversalError> {
        self.find_contained(root, ClassifyKind::Strain, RuleSet::Modules)
            .await
    }

    /// Walk down the hierarchy of ModuleDefinitions and
    /// ComponentDefinitions finding reagents.
    pub async fn find_contained_reagents(&mut self, root: &Node) -> Result<Vec<Node>, TraversalError> {
        self.find_contained(root, ClassifyKind::Reagent, RuleSet::ModulesAndComponents)
            .await
    }

    /// Breadth-first search up the module definition hierarchy for module
    /// definitions with no parent module. Memoized per start node.
    pub async fn root_module_definitions(&mut self, node: &Node) -> Result<Vec<Node>, TraversalError> {
        let key = WalkKey::Roots(node.clone());
        if let Some(cached) = self.walk_cache.get(&key) {
            return Ok(cached.clone());
        }

        let ancestors = self.parent_module_definitions(node).await?;
        let mut queue: VecDeque<Node> = ancestors.iter().cloned().collect();
        let mut seen: HashSet<Node> = ancestors.into_iter().collect();
        let mut roots = Vec::new();
        while let Some(ancestor) = queue.pop_front() {
            let parents = self.parent_module_definitions(&ancestor).await?;
            if parents.is_empty() {
                roots.push(ancestor);
                continue;
            }
            for parent in parents {
                if seen.insert(parent.clone()) {
                    queue.push_back(parent);
                }
            }
        }

        self.walk_cache.put(key, roots.clone());
        Ok(roots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Triple;
    use crate::store::MemoryStore;
    use crate::vocab::{Predicate, STRAIN_ROLE};

    fn prospector(triples: Vec<Triple>) -> Prospector<MemoryStore> {
        Prospector::new(MemoryStore::new(triples))
    }

    fn module_child(parent: &str, instance: &str, child: &str) -> [Triple; 2] {
        [
            Triple::new(parent, Predicate::Module.node(), instance),
            Triple::new(instance, Predicate::Definition.node(), child),
        ]
    }

    fn strain(uri: &str) -> Triple {
        Triple::new(uri, Predicate::Role.node(), STRAIN_ROLE)
    }

    #[tokio::test]
    async fn test_bfs_discovery_order() {
        // R has children {A, B}; A is a strain; B has child C, a strain.
        let mut triples = Vec::new();
        triples.extend(module_child("urn:R", "urn:mA", "urn:A"));
        triples.extend(module_child("urn:R", "urn:mB", "urn:B"));
        triples.extend(module_child("urn:B", "urn:mC", "urn:C"));
        triples.push(strain("urn:A"));
        triples.push(strain("urn:C"));
        let mut p = prospector(triples);

        let strains = p.find_contained_strains(&Node::new("urn:R")).await.unwrap();
        assert_eq!(strains, vec![Node::new("urn:A"), Node::new("urn:C")]);
    }

    #[tokio::test]
    async fn test_walk_terminates_on_cycles() {
        // A contains B, B contains A.
        let mut triples = Vec::new();
        triples.extend(module_child("urn:A", "urn:mB", "urn:B"));
        triples.extend(module_child("urn:B", "urn:mA", "urn:A"));
        triples.push(strain("urn:B"));
        let mut p = prospector(triples);

        let strains = p.find_contained_strains(&Node::new("urn:A")).await.unwrap();
        assert_eq!(strains, vec![Node::new("urn:B")]);
    }

    #[tokio::test]
    async fn test_diamond_reports_node_once() {
        // R contains A and B; both contain C.
        let mut triples = Vec::new();
        triples.extend(module_child("urn:R", "urn:mA", "urn:A"));
        triples.extend(module_child("urn:R", "urn:mB", "urn:B"));
        triples.extend(module_child("urn:A", "urn:mC1", "urn:C"));
        triples.extend(module_child("urn:B", "urn:mC2", "urn:C"));
        triples.push(strain("urn:C"));
        let mut p = prospector(triples);

        let strains = p.find_contained_strains(&Node::new("urn:R")).await.unwrap();
        assert_eq!(strains, vec![Node::new("urn:C")]);
    }

    #[tokio::test]
    async fn test_walk_is_memoized() {
        let mut triples = Vec::new();
        triples.extend(module_child("urn:R", "urn:mA", "urn:A"));
        triples.push(strain("urn:A"));
        let mut p = prospector(triples);
        let root = Node::new("urn:R");

        p.find_contained_strains(&root).await.unwrap();
        let after_first = p.store().query_count();
        p.find_contained_strains(&root).await.unwrap();
        assert_eq!(p.store().query_count(), after_first);
    }

    #[tokio::test]
    async fn test_reagent_walk_uses_component_rules() {
        // R --functionalComponent--> fc --definition--> reagent
        let triples = vec![
            Triple::new("urn:R", Predicate::FunctionalComponent.node(), "urn:fc"),
            Triple::new("urn:fc", Predicate::Definition.node(), "urn:iptg"),
            Triple::new(
                "urn:iptg",
                Predicate::Type.node(),
                "http://purl.obolibrary.org/obo/CHEBI_61448",
            ),
        ];
        let mut p = prospector(triples);

        let reagents = p.find_contained_reagents(&Node::new("urn:R")).await.unwrap();
        assert_eq!(reagents, vec![Node::new("urn:iptg")]);

        // The strain walk does not expand that edge.
        let strains = p.find_contained_strains(&Node::new("urn:R")).await.unwrap();
        assert!(strains.is_empty());
    }

    #[tokio::test]
    async fn test_root_module_definitions() {
        // grandparent contains parent contains child; grandparent is a root.
        let mut triples = Vec::new();
        triples.extend(module_child("urn:grandparent", "urn:m1", "urn:parent"));
        triples.extend(module_child("urn:parent", "urn:m2", "urn:child"));
        let mut p = prospector(triples);

        let roots = p
            .root_module_definitions(&Node::new("urn:child"))
            .await
            .unwrap();
        assert_eq!(roots, vec![Node::new("urn:grandparent")]);
    }

    #[tokio::test]
    async fn test_root_walk_terminates_on_parent_cycle() {
        let mut triples = Vec::new();
        triples.extend(module_child("urn:A", "urn:mB", "urn:B"));
        triples.extend(module_child("urn:B", "urn:mA", "urn:A"));
        let mut p = prospector(triples);

        // Every ancestor has a parent, so there are no roots; the walk
        // must still terminate.
        let roots = p.root_module_definitions(&Node::new("urn:A")).await.unwrap();
        assert!(roots.is_empty());
    }
}
