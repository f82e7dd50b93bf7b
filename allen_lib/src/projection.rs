use crate::codec::{classify, Classification};
use crate::endpoints::{Endpoint, IntervalId};
use crate::timelines::{Timeline, Vocabulary};

/// Restrict the timeline to the labels in `keep`.  Moments that become
/// empty are dropped, the order of the others is preserved.
#[must_use]
pub fn project(timeline: &Timeline, keep: &Vocabulary) -> Timeline {
    timeline
        .iter()
        .map(|m| m.intersection(keep))
        .filter(|m| !m.is_empty())
        .collect()
}

/// Restrict the timeline to the endpoints of two intervals
#[must_use]
pub fn project_intervals(timeline: &Timeline, a: IntervalId, c: IntervalId) -> Timeline {
    let keep: Vocabulary = Endpoint::both(a)
        .into_iter()
        .chain(Endpoint::both(c))
        .collect();
    project(timeline, &keep)
}

/// The relation between `a` and `c` in a timeline that might involve other
/// intervals.
#[must_use]
pub fn classify_composition(
    merged: &Timeline,
    a: IntervalId,
    c: IntervalId,
) -> Classification {
    classify(&project_intervals(merged, a, c), a, c)
}

#[cfg(test)]
mod test {
    use crate::codec::Classification;
    use crate::endpoints::{Endpoint, IntervalId};
    use crate::projection::{classify_composition, project, project_intervals};
    use crate::relations::Relation;
    use crate::timelines::{Timeline, Vocabulary};

    #[test]
    fn test_project() {
        let [l0, r0] = Endpoint::both(IntervalId(0));
        let [l1, r1] = Endpoint::both(IntervalId(1));
        let [l2, r2] = Endpoint::both(IntervalId(2));

        // 0 overlaps 1, 1 meets 2
        let t = Timeline::from_labels([
            vec![l0],
            vec![l1],
            vec![r0],
            vec![r1, l2],
            vec![r2],
        ]);
        let p = project(&t, &Vocabulary::from([l0, r0, l2, r2]));
        assert_eq!(p.to_string(), "[{l0}, {r0}, {l2}, {r2}]");
        assert_eq!(project_intervals(&t, IntervalId(0), IntervalId(2)), p);
        assert_eq!(
            classify_composition(&t, IntervalId(0), IntervalId(2)),
            Classification::Known(Relation::Before)
        );
        assert_eq!(
            classify_composition(&t, IntervalId(1), IntervalId(2)),
            Classification::Known(Relation::Meets)
        );
        assert_eq!(
            classify_composition(&t, IntervalId(2), IntervalId(0)),
            Classification::Known(Relation::After)
        );

        // Keeping everything is the identity, keeping nothing is empty
        assert_eq!(project(&t, &t.vocabulary()), t);
        assert!(project(&t, &Vocabulary::new()).is_empty());

        // Simultaneous labels stay together
        let p = project(&t, &Vocabulary::from([r1, l2]));
        assert_eq!(p.to_string(), "[{r1, l2}]");
    }

    #[test]
    fn test_unrelated_interval() {
        let t = Timeline::from_labels([Endpoint::both(IntervalId(0))]);
        assert_eq!(
            classify_composition(&t, IntervalId(0), IntervalId(3)),
            Classification::Unknown
        );
    }
}
