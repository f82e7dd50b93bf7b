//! Composition of Allen relations.
//!
//! Knowing that X r1 Y and Y r2 Z, the composition r1∘r2 is the set of all
//! relations that can hold between X and Z.  It is computed symbolically:
//! the canonical timelines for X r1 Y and Y r2 Z are superposed, and each
//! resulting timeline is projected on the endpoints of X and Z to read the
//! relation off it.

use crate::codec::{encode, Classification};
use crate::endpoints::IntervalId;
use crate::merge::merge;
use crate::projection::{classify_composition, project_intervals};
use crate::relations::{Relation, RelationSet};
use crate::timelines::Timeline;
use crate::{Error, Result};
use itertools::iproduct;
use log::{debug, warn};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::sync::OnceLock;

const X: IntervalId = IntervalId(0);
const Y: IntervalId = IntervalId(1);
const Z: IntervalId = IntervalId(2);

const COUNT: usize = Relation::ALL.len();

/// One superposition considered while composing
#[derive(Debug, Clone)]
pub struct Step {
    pub merged: Timeline,

    // The merged timeline, restricted to the endpoints of X and Z
    pub projected: Timeline,

    pub outcome: Classification,
}

/// All the details of how a composition was computed
#[derive(Debug, Clone)]
pub struct CompositionTrace {
    pub first: Relation,
    pub second: Relation,

    // X first Y
    pub first_timeline: Timeline,

    // Y second Z
    pub second_timeline: Timeline,

    pub steps: Vec<Step>,

    // The distinct relations found between X and Z
    pub result: RelationSet,

    // Number of superpositions from which no relation could be read.  This
    // is always zero unless the codec or the merge is broken.
    pub unknown: usize,
}

/// Compute `first ∘ second`, keeping every intermediate timeline.
pub fn compose_traced(first: Relation, second: Relation) -> Result<CompositionTrace> {
    let first_timeline = encode(X, Y, first);
    let second_timeline = encode(Y, Z, second);
    let mut result = RelationSet::empty();
    let mut unknown = 0;

    let steps: Vec<Step> = merge(&first_timeline, &second_timeline)?
        .into_iter()
        .map(|merged| {
            let projected = project_intervals(&merged, X, Z);
            let outcome = classify_composition(&merged, X, Z);
            match outcome {
                Classification::Known(rel) => result.insert(rel),
                Classification::Unknown => {
                    warn!(
                        "{}∘{}: no relation between {} and {} in {}",
                        first, second, X, Z, merged
                    );
                    unknown += 1;
                }
            }
            Step {
                merged,
                projected,
                outcome,
            }
        })
        .collect();

    Ok(CompositionTrace {
        first,
        second,
        first_timeline,
        second_timeline,
        steps,
        result,
        unknown,
    })
}

/// Compute a single entry of the table.  An empty result can only come from
/// a defect in the engine, and is reported as an error.
fn compute_entry(first: Relation, second: Relation) -> Result<RelationSet> {
    let trace = compose_traced(first, second)?;
    if trace.result.is_empty() {
        return Err(Error::EmptyComposition(first, second));
    }
    Ok(trace.result)
}

/// The composition of every pair of relations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositionTable {
    entries: [[RelationSet; COUNT]; COUNT],
}

static SHARED: OnceLock<CompositionTable> = OnceLock::new();

impl CompositionTable {
    pub fn build() -> Result<Self> {
        Self::build_with_progress(|_, _| {})
    }

    /// Build the table, calling `progress(current, max)` after each entry
    #[allow(clippy::indexing_slicing)] // index() is always below COUNT
    pub fn build_with_progress(mut progress: impl FnMut(u64, u64)) -> Result<Self> {
        let max = (COUNT * COUNT) as u64;
        let mut entries = [[RelationSet::empty(); COUNT]; COUNT];
        for (current, (first, second)) in
            iproduct!(Relation::ALL, Relation::ALL).enumerate()
        {
            entries[first.index()][second.index()] = compute_entry(first, second)?;
            progress(current as u64 + 1, max);
        }
        let table = CompositionTable { entries };
        debug!("built composition table, {} relations", table.total_size());
        Ok(table)
    }

    /// Build the table, computing all entries in parallel.
    #[cfg(feature = "parallel")]
    pub fn build_parallel() -> Result<Self> {
        use rayon::prelude::*;

        let pairs: Vec<(Relation, Relation)> =
            iproduct!(Relation::ALL, Relation::ALL).collect();
        let computed = pairs
            .into_par_iter()
            .map(|(first, second)| {
                compute_entry(first, second).map(|set| (first, second, set))
            })
            .collect::<Result<Vec<_>>>()?;
        let table = Self::from_entries(computed);
        debug!(
            "built composition table in parallel, {} relations",
            table.total_size()
        );
        Ok(table)
    }

    /// A table shared by the whole process, built on first use
    pub fn shared() -> Result<&'static Self> {
        if let Some(table) = SHARED.get() {
            return Ok(table);
        }
        let table = Self::build()?;
        Ok(SHARED.get_or_init(|| table))
    }

    /// Create a table from explicit entries.  Missing pairs are left empty.
    #[allow(clippy::indexing_slicing)] // index() is always below COUNT
    pub(crate) fn from_entries(
        entries: impl IntoIterator<Item = (Relation, Relation, RelationSet)>,
    ) -> Self {
        let mut table = CompositionTable {
            entries: [[RelationSet::empty(); COUNT]; COUNT],
        };
        for (first, second, set) in entries {
            table.entries[first.index()][second.index()] = set;
        }
        table
    }

    /// The relations that may hold between X and Z, when X first Y and
    /// Y second Z.
    #[must_use]
    #[allow(clippy::indexing_slicing)] // index() is always below COUNT
    pub fn get(&self, first: Relation, second: Relation) -> RelationSet {
        self.entries[first.index()][second.index()]
    }

    /// All entries, in canonical order of the first then second relation
    pub fn iter(&self) -> impl Iterator<Item = (Relation, Relation, RelationSet)> + '_ {
        iproduct!(Relation::ALL, Relation::ALL)
            .map(|(first, second)| (first, second, self.get(first, second)))
    }

    /// Sum of the cardinalities of all entries
    #[must_use]
    pub fn total_size(&self) -> usize {
        self.iter().map(|(_, _, set)| set.len()).sum()
    }
}

/// Serialized as a map from "r1,r2" to the codes of the composition
impl Serialize for CompositionTable {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(COUNT * COUNT))?;
        for (first, second, set) in self.iter() {
            map.serialize_entry(&format!("{},{}", first, second), &set)?;
        }
        map.end()
    }
}

/// Compute `first ∘ second`, from the shared table.
pub fn compose(first: Relation, second: Relation) -> Result<RelationSet> {
    Ok(CompositionTable::shared()?.get(first, second))
}
