//! Flexible full-text search over crime-script document graphs.
//!
//! Builds an inverted index over scripts → scenes → act variants →
//! activities and conditions, scores matches by specificity (exact entity
//! reference > parent category > free text), and aggregates per-term hits
//! into a ranked list of scripts and their best-matching locations.
//!
//! The index and query results are derived state: [`SearchService`] rebuilds
//! the index wholesale whenever the model changes and reruns the query
//! pipeline (tokenize → lookup → aggregate) whenever the search text does.

pub mod aggregate;
pub mod index;
pub mod lang;
pub mod model;
pub mod resolver;
pub mod service;
pub mod tokenizer;

pub use aggregate::{aggregate_results, ActHit, SearchResult};
pub use index::{build_index, IndexEntry, InvertedIndex, Location, MatchScore};
pub use lang::{Language, Locale};
pub use model::{
    Act, Activity, Condition, ConditionType, CrimeScript, CrimeScriptFilter, DataModel, Entity,
    Id, Measure, Scene,
};
pub use resolver::EntityResolver;
pub use service::{filter_to_text, SearchService};
pub use tokenizer::tokenize;
