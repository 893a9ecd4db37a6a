pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod traverse;
pub mod vocab;

pub use config::{Config, ConfigError};
pub use error::TraversalError;
pub use model::{Node, PathRecord, Triple, TriplePattern};
pub use store::{Implementation, MemoryStore, StoreError, SynBioHubClient, TripleStore};
pub use traverse::{ClassifyKind, ExperimentRow, ExperimentTable, Prospector, RuleSet};
pub use vocab::Predicate;
