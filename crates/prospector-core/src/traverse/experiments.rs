//! Pathfinding join from a genetic construct to its experiment
//! implementation records.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::info;

use super::Prospector;
use crate::error::TraversalError;
use crate::model::{Node, PathRecord, Triple, TriplePattern};
use crate::store::TripleStore;
use crate::vocab::{Predicate, SBOL_TYPE_COMPONENT};

/// One discovered implementation, with the traversal path that reached it.
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentRow {
    pub uri: Node,
    pub title: String,
    /// How this implementation was reached from the construct, most recent
    /// step first.
    pub path: PathRecord,
}

/// The result table of [`Prospector::find_construct_experiments`]: one row
/// per implementation, columns uri and title.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExperimentTable {
    pub rows: Vec<ExperimentRow>,
}

impl ExperimentTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExperimentRow> {
        self.rows.iter()
    }
}

/// Node-to-path result set for one join stage. BTreeMap keeps stage
/// iteration deterministic.
type StageResults = BTreeMap<Node, PathRecord>;

impl<S: TripleStore> Prospector<S> {
    /// Find all implementations ("builds") of experiments on `construct`,
    /// with their titles.
    ///
    /// The join walks: definers of the construct, filtered to SBOL
    /// Components; their containing members; design definitions; circuit
    /// designs; then backward through `definition` and `module`; finally
    /// implementations via `built`, optionally constrained to a growth
    /// media definition.
    ///
    /// The join requires a strict tree: if two independent chains converge
    /// on one node, the traversal aborts with
    /// [`TraversalError::AmbiguousPath`]. A construct with no definers
    /// yields an empty table, not an error.
    pub async fn find_construct_experiments(
        &mut self,
        construct: &Node,
        media: Option<&Node>,
    ) -> Result<ExperimentTable, TraversalError> {
        let definers = self.subjects_for(Predicate::Definition, construct).await?;
        info!("Found {} definers", definers.len());

        let mut results = StageResults::new();
        for d in &definers {
            results.insert(
                d.clone(),
                vec![Triple::new(
                    d.clone(),
                    Predicate::Definition.node(),
                    construct.clone(),
                )],
            );
        }

        info!("Keeping definers of type component");
        let mut component_definers = Vec::new();
        for d in definers {
            let is_component = self
                .triple_exists(&d, Predicate::RdfType, &Node::new(SBOL_TYPE_COMPONENT))
                .await?;
            if is_component {
                component_definers.push(d);
            }
        }
        info!("{} definers are components", component_definers.len());

        let mut members = Vec::new();
        for d in &component_definers {
            let base = results.get(d).cloned().unwrap_or_default();
            for m in self.subjects_for(Predicate::Component, d).await? {
                let mut path = vec![Triple::new(m.clone(), Predicate::Component.node(), d.clone())];
                path.extend(base.iter().cloned());
                results.insert(m.clone(), path);
                members.push(m);
            }
        }
        info!("Found {} possible members", members.len());
        for m in &members {
            info!("Possible member: {}", m);
        }

        // Design definitions: subjects defining the members.
        let mut design_defs = StageResults::new();
        for m in &members {
            let base = results.get(m).cloned().unwrap_or_default();
            for dd in self.subjects_for(Predicate::Definition, m).await? {
                if design_defs.contains_key(&dd) {
                    return Err(TraversalError::AmbiguousPath(dd));
                }
                let mut path = vec![Triple::new(
                    dd.clone(),
                    Predicate::Definition.node(),
                    m.clone(),
                )];
                path.extend(base.iter().cloned());
                design_defs.insert(dd, path);
            }
        }

        // Circuit designs: module definitions instantiating the design
        // definitions as functional components.
        let mut circuit_designs = StageResults::new();
        for (dd, base) in &design_defs {
            let designs = self.subjects_for(Predicate::FunctionalComponent, dd).await?;
            info!("Found {} circuit designs for {}", designs.len(), dd);
            for cd in designs {
                if circuit_designs.contains_key(&cd) {
                    return Err(TraversalError::AmbiguousPath(cd));
                }
                let mut path = vec![Triple::new(
                    cd.clone(),
                    Predicate::FunctionalComponent.node(),
                    dd.clone(),
                )];
                path.extend(base.iter().cloned());
                circuit_designs.insert(cd, path);
            }
        }

        let results = self.find_subjects(circuit_designs, Predicate::Definition).await?;
        let results = self.find_subjects(results, Predicate::Module).await?;

        // Implementations of the modules found above.
        let mut rows = Vec::new();
        for (obj, base) in &results {
            for implementation in self.store().implementations(obj, media).await? {
                let mut path = vec![Triple::new(
                    implementation.uri.clone(),
                    Predicate::Built.node(),
                    obj.clone(),
                )];
                path.extend(base.iter().cloned());
                rows.push(ExperimentRow {
                    uri: implementation.uri,
                    title: implementation.title,
                    path,
                });
            }
        }

        info!("Done");
        Ok(ExperimentTable { rows })
    }

    /// One backward join step: for every node in `results`, find the
    /// subjects pointing at it via `predicate` and extend their paths.
    /// Two chains converging on one subject abort the traversal.
    async fn find_subjects(
        &self,
        results: StageResults,
        predicate: Predicate,
    ) -> Result<StageResults, TraversalError> {
        let mut next = StageResults::new();
        for (obj, base) in &results {
            let subjects = self.subjects_for(predicate, obj).await?;
            info!("Found {} {} for {}", subjects.len(), predicate.uri(), obj);
            if subjects.is_empty() {
                // Didn't find anything. What are the possibilities?
                let pairs = self.store().query(&TriplePattern::with_object(obj.clone())).await?;
                let predicates: BTreeSet<&str> =
                    pairs.iter().map(|t| t.predicate.as_str()).collect();
                info!("All predicates for {}: {:?}", obj, predicates);
            }
            for s in subjects {
                if next.contains_key(&s) {
                    return Err(TraversalError::AmbiguousPath(s));
                }
                let mut path = vec![Triple::new(s.clone(), predicate.node(), obj.clone())];
                path.extend(base.iter().cloned());
                next.insert(s, path);
            }
        }
        Ok(next)
    }
}
