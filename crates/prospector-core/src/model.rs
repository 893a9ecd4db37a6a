//! Data model for the remote SBOL graph.
//!
//! Nodes are opaque URIs (or literals, in object position); equality is
//! structural string equality. A [`TriplePattern`] is the only query request
//! shape the engine issues; the store adapter, not the engine, turns it
//! into SPARQL.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An entity in the remote graph, identified by its URI.
///
/// Object-position nodes may also hold plain literals (titles, the stub
/// marker's `"true"`), which the store returns verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Node(String);

impl Node {
    pub fn new(uri: impl Into<String>) -> Self {
        Node(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node(s)
    }
}

/// A single edge in the remote graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    pub subject: Node,
    pub predicate: Node,
    pub object: Node,
}

impl Triple {
    pub fn new(subject: impl Into<Node>, predicate: impl Into<Node>, object: impl Into<Node>) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}

/// A pattern-matched triple query: any unbound position is a wildcard.
///
/// The constructors cover every shape the traversal engine issues. A fully
/// unbound pattern is rejected by store adapters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriplePattern {
    pub subject: Option<Node>,
    pub predicate: Option<Node>,
    pub object: Option<Node>,
}

impl TriplePattern {
    /// All subjects S with `(S, predicate, object)`.
    pub fn subjects_of(predicate: impl Into<Node>, object: impl Into<Node>) -> Self {
        Self {
            subject: None,
            predicate: Some(predicate.into()),
            object: Some(object.into()),
        }
    }

    /// All objects O with `(subject, predicate, O)`.
    pub fn objects_of(subject: impl Into<Node>, predicate: impl Into<Node>) -> Self {
        Self {
            subject: Some(subject.into()),
            predicate: Some(predicate.into()),
            object: None,
        }
    }

    /// All (P, O) pairs for a fixed subject.
    pub fn about(subject: impl Into<Node>) -> Self {
        Self {
            subject: Some(subject.into()),
            predicate: None,
            object: None,
        }
    }

    /// All (S, O) pairs for a fixed predicate.
    pub fn with_predicate(predicate: impl Into<Node>) -> Self {
        Self {
            subject: None,
            predicate: Some(predicate.into()),
            object: None,
        }
    }

    /// All (S, P) pairs for a fixed object.
    pub fn with_object(object: impl Into<Node>) -> Self {
        Self {
            subject: None,
            predicate: None,
            object: Some(object.into()),
        }
    }

    /// Existence check for one fully bound triple.
    pub fn exact(
        subject: impl Into<Node>,
        predicate: impl Into<Node>,
        object: impl Into<Node>,
    ) -> Self {
        Self {
            subject: Some(subject.into()),
            predicate: Some(predicate.into()),
            object: Some(object.into()),
        }
    }

    /// True if no position is bound.
    pub fn is_unbound(&self) -> bool {
        self.subject.is_none() && self.predicate.is_none() && self.object.is_none()
    }

    /// True if a candidate triple matches every bound position.
    pub fn matches(&self, triple: &Triple) -> bool {
        self.subject.as_ref().map_or(true, |s| *s == triple.subject)
            && self.predicate.as_ref().map_or(true, |p| *p == triple.predicate)
            && self.object.as_ref().map_or(true, |o| *o == triple.object)
    }
}

/// The chain of triples by which a result node was reached, most recent
/// step first: `path[0].subject` is the result node and the last triple's
/// object is the traversal root.
pub type PathRecord = Vec<Triple>;
