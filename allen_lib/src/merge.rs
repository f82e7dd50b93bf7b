//! Superposition of two timelines.
//!
//! Given two timelines that may share some labels, we enumerate every
//! timeline over the union of their vocabularies that keeps the order of
//! each input, and places every shared label at a single position.  For
//! instance, superposing `[{l0}, {r0, l1}, {r1}]` (0 meets 1) with
//! `[{l1}, {r1}, {l2}, {r2}]` (1 before 2):
//!
//! ```text
//!     [{l0}, {r0, l1}, {r1}, {l2}, {r2}]
//! ```
//! since l1 and r1 must be synchronized, and nothing else is free to move.
//!
//! At each step, looking at the first moment h1 of the first timeline and
//! h2 of the second one, we can:
//!    * emit h1 alone, if it contains no label known to the second timeline
//!    * emit h1 and h2 merged as one moment, if their shared labels agree
//!    * emit h2 alone, if it contains no label known to the first timeline
//! and all applicable choices are explored.

use crate::timelines::{Moment, Timeline, Vocabulary};
use crate::Result;
use log::trace;

/// A partial result: a moment, and the partial result it extends.
struct Node {
    parent: Option<usize>,
    moment: Moment,
}

/// Remaining work: how much of each input was consumed, and the last node
/// of the partial result built so far.
struct State {
    pos1: usize,
    pos2: usize,
    tail: Option<usize>,
}

/// Enumerate all superpositions of the two timelines.
/// The same timeline might be returned several times when multiple choices
/// lead to it.
pub fn merge(timeline1: &Timeline, timeline2: &Timeline) -> Result<Vec<Timeline>> {
    timeline1.validate()?;
    timeline2.validate()?;

    let voc1 = timeline1.vocabulary();
    let voc2 = timeline2.vocabulary();
    let moments1 = timeline1.moments();
    let moments2 = timeline2.moments();

    // Partial results share their prefixes, so they are stored once in an
    // arena and linked to their parent.
    let mut arena: Vec<Node> = Vec::new();
    let mut result = Vec::new();
    let mut explored: usize = 0;
    let mut stack = vec![State {
        pos1: 0,
        pos2: 0,
        tail: None,
    }];

    while let Some(state) = stack.pop() {
        explored += 1;
        let h1 = moments1.get(state.pos1);
        let h2 = moments2.get(state.pos2);

        if h1.is_none() && h2.is_none() {
            result.push(collect(&arena, state.tail));
            continue;
        }

        // Choices are pushed in reverse order, so that results come out in
        // the order: h1 first, then merged, then h2 first.
        if let Some(h2) = h2 {
            if h2.is_disjoint(&voc1) {
                arena.push(Node {
                    parent: state.tail,
                    moment: h2.clone(),
                });
                stack.push(State {
                    pos1: state.pos1,
                    pos2: state.pos2 + 1,
                    tail: Some(arena.len() - 1),
                });
            }
        }

        if let (Some(h1), Some(h2)) = (h1, h2) {
            if can_synchronize(h1, h2, &voc1, &voc2) {
                arena.push(Node {
                    parent: state.tail,
                    moment: h1.union(h2),
                });
                stack.push(State {
                    pos1: state.pos1 + 1,
                    pos2: state.pos2 + 1,
                    tail: Some(arena.len() - 1),
                });
            }
        }

        if let Some(h1) = h1 {
            if h1.is_disjoint(&voc2) {
                arena.push(Node {
                    parent: state.tail,
                    moment: h1.clone(),
                });
                stack.push(State {
                    pos1: state.pos1 + 1,
                    pos2: state.pos2,
                    tail: Some(arena.len() - 1),
                });
            }
        }
    }

    trace!(
        "merge {} with {}: {} states, {} timelines",
        timeline1,
        timeline2,
        explored,
        result.len()
    );
    Ok(result)
}

/// Whether the two moments can occur at the same instant: every label of
/// one that the other timeline knows about must be in the other moment.
fn can_synchronize(
    h1: &Moment,
    h2: &Moment,
    voc1: &Vocabulary,
    voc2: &Vocabulary,
) -> bool {
    h1.intersection(voc2).is_subset(h2) && h2.intersection(voc1).is_subset(h1)
}

/// Rebuild a full timeline by walking up from its last node
fn collect(arena: &[Node], tail: Option<usize>) -> Timeline {
    let mut moments = Vec::new();
    let mut current = tail;
    while let Some(node) = current.and_then(|idx| arena.get(idx)) {
        moments.push(node.moment.clone());
        current = node.parent;
    }
    moments.reverse();
    Timeline::new(moments)
}
