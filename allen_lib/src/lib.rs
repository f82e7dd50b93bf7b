//! Symbolic reasoning on Allen's interval algebra.
//!
//! Relations between two intervals are encoded as timelines: ordered
//! sequences of moments, each moment holding the interval endpoints that
//! occur at the same instant.  Composing two relations is then a matter of
//! superposing their timelines in every possible way, and reading the
//! relation between the outer intervals off each result.
//!
//! ```
//! use allen_lib::{compose, Relation, RelationSet};
//!
//! // X overlaps Y, Y meets Z: X is before Z
//! let set = compose(Relation::Overlaps, Relation::Meets).unwrap();
//! assert_eq!(set, RelationSet::single(Relation::Before));
//! ```

pub mod checks;
pub mod codec;
pub mod composition;
pub mod endpoints;
pub mod merge;
pub mod projection;
pub mod relations;
pub mod timelines;

pub use crate::composition::{compose, CompositionTable};
pub use crate::relations::{Relation, RelationSet};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unrecognized relation {0:?}")]
    UnrecognizedRelation(String),

    #[error("Malformed timeline: {0}")]
    MalformedTimeline(String),

    #[error("Composition {0}∘{1} has no possible relation")]
    EmptyComposition(Relation, Relation),

    #[error("Composition table is inconsistent:\n{0}")]
    AlgebraViolation(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
