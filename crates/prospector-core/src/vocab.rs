//! The closed SBOL/Dublin Core/RDF vocabulary used by the traversal engine.
//!
//! Every predicate the engine ever queries is a member of [`Predicate`];
//! expansion rules and classifiers are defined against these members rather
//! than against raw URI strings.

use crate::model::Node;

const SBOL_ROOT: &str = "http://sbols.org/v2";

/// The predicates the traversal engine knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Predicate {
    /// `sbol:module`: ModuleDefinition to its Module instantiations.
    Module,
    /// `sbol:component`: definition to its Component instantiations.
    Component,
    /// `sbol:functionalComponent`: ModuleDefinition to FunctionalComponent.
    FunctionalComponent,
    /// `sbol:definition`: an instantiation back to its definition.
    Definition,
    /// `sbol:member`: collection membership.
    Member,
    /// `sbol:built`: implementation record to the design it realizes.
    Built,
    /// `sbol:role`: ontology role of a definition.
    Role,
    /// `sbol:type`: ontology type of a definition.
    Type,
    /// `dcterms:title`.
    Title,
    /// `rdf:type`.
    RdfType,
    /// `sd2e:stub_object`: SD2 marker for placeholder records.
    Stub,
}

impl Predicate {
    /// The full URI of this predicate.
    pub fn uri(&self) -> &'static str {
        match self {
            Predicate::Module => "http://sbols.org/v2#module",
            Predicate::Component => "http://sbols.org/v2#component",
            Predicate::FunctionalComponent => "http://sbols.org/v2#functionalComponent",
            Predicate::Definition => "http://sbols.org/v2#definition",
            Predicate::Member => "http://sbols.org/v2#member",
            Predicate::Built => "http://sbols.org/v2#built",
            Predicate::Role => "http://sbols.org/v2#role",
            Predicate::Type => "http://sbols.org/v2#type",
            Predicate::Title => "http://purl.org/dc/terms/title",
            Predicate::RdfType => "http://www.w3.org/1999/02/22-rdf-syntax-ns#type",
            Predicate::Stub => "http://sd2e.org#stub_object",
        }
    }

    /// This predicate as a graph node.
    pub fn node(&self) -> Node {
        Node::new(self.uri())
    }
}

/// rdf:type value identifying an SBOL Component.
pub const SBOL_TYPE_COMPONENT: &str = "http://sbols.org/v2#Component";

/// Role URI marking a ModuleDefinition as a strain (NCIT "Strain").
pub const STRAIN_ROLE: &str = "http://purl.obolibrary.org/obo/NCIT_C14419";

/// Role URI marking a definition as growth media (NCIT "Growth Medium").
pub const GROWTH_MEDIA_ROLE: &str = "http://purl.obolibrary.org/obo/NCIT_C85504";

// CHEBI prefixes are used to identify reagents.
pub const CHEBI_PURL_PREFIX: &str = "http://purl.obolibrary.org/obo/CHEBI";
pub const CHEBI_IDENTIFIERS_PREFIX: &str = "http://identifiers.org/chebi/CHEBI";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicate_uris_share_sbol_root() {
        for p in [
            Predicate::Module,
            Predicate::Component,
            Predicate::FunctionalComponent,
            Predicate::Definition,
            Predicate::Member,
            Predicate::Built,
            Predicate::Role,
            Predicate::Type,
        ] {
            assert!(p.uri().starts_with(SBOL_ROOT));
        }
    }

    #[test]
    fn test_predicate_node_round_trip() {
        let node = Predicate::Definition.node();
        assert_eq!(node.as_str(), "http://sbols.org/v2#definition");
    }
}
