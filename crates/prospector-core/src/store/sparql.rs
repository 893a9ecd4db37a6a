//! SPARQL rendering and result parsing for the SynBioHub adapter.
//!
//! Each supported [`TriplePattern`] shape maps to one fixed VALUES-clause
//! SELECT template. Nothing outside the store layer builds query strings.

use serde::Deserialize;
use std::collections::HashMap;

use crate::model::{Node, Triple, TriplePattern};
use crate::store::error::StoreError;
use crate::vocab::{Predicate, GROWTH_MEDIA_ROLE};

/// Render the SELECT query for a pattern.
///
/// Supported shapes: subjects for (P,O), objects for (S,P), (P,O) pairs for
/// S, (S,O) pairs for P, (S,P) pairs for O, and the fully bound existence
/// check. A fully unbound pattern, or subject+object without a predicate,
/// is rejected.
pub(crate) fn render(pattern: &TriplePattern) -> Result<String, StoreError> {
    let s = pattern.subject.as_ref();
    let p = pattern.predicate.as_ref();
    let o = pattern.object.as_ref();
    let query = match (s, p, o) {
        (None, Some(p), Some(o)) => format!(
            "SELECT ?s WHERE {{\n    VALUES (?p ?o) {{ ( <{}> <{}> ) }}\n    ?s ?p ?o .\n}}",
            p, o
        ),
        (Some(s), Some(p), None) => format!(
            "SELECT ?o WHERE {{\n    VALUES (?s ?p) {{ ( <{}> <{}> ) }}\n    ?s ?p ?o .\n}}",
            s, p
        ),
        (Some(s), None, None) => format!(
            "SELECT ?p ?o WHERE {{\n    VALUES (?s) {{ ( <{}> ) }}\n    ?s ?p ?o .\n}}",
            s
        ),
        (None, Some(p), None) => format!(
            "SELECT ?s ?o WHERE {{\n    VALUES (?p) {{ ( <{}> ) }}\n    ?s ?p ?o .\n}}",
            p
        ),
        (None, None, Some(o)) => format!(
            "SELECT ?s ?p WHERE {{\n    VALUES (?o) {{ ( <{}> ) }}\n    ?s ?p ?o .\n}}",
            o
        ),
        (Some(s), Some(p), Some(o)) => format!(
            "SELECT ?s ?p ?o WHERE {{\n    VALUES (?s ?p ?o) {{ ( <{}> <{}> <{}> ) }}\n    ?s ?p ?o .\n}}",
            s, p, o
        ),
        _ => return Err(StoreError::UnsupportedPattern),
    };
    Ok(query)
}

/// Render the implementations query: subjects built from `object`, with
/// their titles, optionally constrained to a growth-media definition.
pub(crate) fn render_implementations(object: &Node, media: Option<&Node>) -> String {
    let mut query = format!(
        "SELECT ?s ?title WHERE {{\n    \
         VALUES (?built_pred ?o ?title_pred) {{ ( <{}> <{}> <{}> ) }}\n    \
         ?s ?built_pred ?o .\n    \
         ?s ?title_pred ?title .\n",
        Predicate::Built.uri(),
        object,
        Predicate::Title.uri(),
    );
    if let Some(media) = media {
        query.push_str(&format!(
            "    ?o <{}> ?mod .\n    \
             ?mod <{}> <{media}> .\n    \
             <{media}> <{}> <{}> .\n",
            Predicate::Module.uri(),
            Predicate::Definition.uri(),
            Predicate::Role.uri(),
            GROWTH_MEDIA_ROLE,
        ));
    }
    query.push('}');
    query
}

/// SPARQL 1.1 JSON results document.
#[derive(Debug, Deserialize)]
pub(crate) struct SparqlResults {
    #[allow(dead_code)]
    pub head: SparqlHead,
    pub results: SparqlBindings,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SparqlHead {
    #[allow(dead_code)]
    pub vars: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SparqlBindings {
    pub bindings: Vec<HashMap<String, SparqlValue>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SparqlValue {
    pub value: String,
}

impl SparqlResults {
    /// Reassemble full triples from a result set, filling positions that
    /// were bound in the original pattern.
    pub(crate) fn into_triples(self, pattern: &TriplePattern) -> Result<Vec<Triple>, StoreError> {
        let mut triples = Vec::with_capacity(self.results.bindings.len());
        for row in self.results.bindings {
            let subject = position(&row, "s", pattern.subject.as_ref())?;
            let predicate = position(&row, "p", pattern.predicate.as_ref())?;
            let object = position(&row, "o", pattern.object.as_ref())?;
            triples.push(Triple {
                subject,
                predicate,
                object,
            });
        }
        Ok(triples)
    }
}

fn position(
    row: &HashMap<String, SparqlValue>,
    var: &str,
    bound: Option<&Node>,
) -> Result<Node, StoreError> {
    if let Some(value) = row.get(var) {
        return Ok(Node::new(value.value.clone()));
    }
    bound.cloned().ok_or_else(|| {
        StoreError::ParseError(format!("result row is missing binding for ?{}", var))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_subjects_shape() {
        let q = render(&TriplePattern::subjects_of("urn:p", "urn:o")).unwrap();
        assert!(q.starts_with("SELECT ?s WHERE"));
        assert!(q.contains("VALUES (?p ?o) { ( <urn:p> <urn:o> ) }"));
    }

    #[test]
    fn test_render_objects_shape() {
        let q = render(&TriplePattern::objects_of("urn:s", "urn:p")).unwrap();
        assert!(q.starts_with("SELECT ?o WHERE"));
        assert!(q.contains("( <urn:s> <urn:p> )"));
    }

    #[test]
    fn test_render_pair_shapes() {
        let q = render(&TriplePattern::about("urn:s")).unwrap();
        assert!(q.starts_with("SELECT ?p ?o WHERE"));

        let q = render(&TriplePattern::with_predicate("urn:p")).unwrap();
        assert!(q.starts_with("SELECT ?s ?o WHERE"));

        let q = render(&TriplePattern::with_object("urn:o")).unwrap();
        assert!(q.starts_with("SELECT ?s ?p WHERE"));
    }

    #[test]
    fn test_render_existence_shape() {
        let q = render(&TriplePattern::exact("urn:s", "urn:p", "urn:o")).unwrap();
        assert!(q.contains("VALUES (?s ?p ?o)"));
    }

    #[test]
    fn test_render_rejects_unbound() {
        assert!(matches!(
            render(&TriplePattern::default()),
            Err(StoreError::UnsupportedPattern)
        ));
    }

    #[test]
    fn test_render_implementations_media_clause() {
        let plain = render_implementations(&Node::new("urn:design"), None);
        assert!(!plain.contains("?mod"));

        let media = Node::new("urn:media");
        let filtered = render_implementations(&Node::new("urn:design"), Some(&media));
        assert!(filtered.contains("<urn:media>"));
        assert!(filtered.contains(GROWTH_MEDIA_ROLE));
    }

    #[test]
    fn test_into_triples_fills_bound_positions() {
        let json = r#"{
            "head": { "vars": ["s"] },
            "results": { "bindings": [
                { "s": { "type": "uri", "value": "urn:found" } }
            ] }
        }"#;
        let results: SparqlResults = serde_json::from_str(json).unwrap();
        let pattern = TriplePattern::subjects_of("urn:p", "urn:o");
        let triples = results.into_triples(&pattern).unwrap();
        assert_eq!(triples, vec![Triple::new("urn:found", "urn:p", "urn:o")]);
    }
}
