use crate::endpoints::{Endpoint, IntervalId};
use crate::relations::Relation;
use crate::timelines::{Timeline, Vocabulary};
use crate::Result;
use std::cmp::Ordering;

/// The result of reading a relation off a timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Known(Relation),

    // The timeline does not describe two well-formed intervals, for
    // instance it has extra labels, or one interval ends before it starts.
    Unknown,
}

impl Classification {
    #[must_use]
    pub fn relation(self) -> Option<Relation> {
        match self {
            Classification::Known(rel) => Some(rel),
            Classification::Unknown => None,
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Classification::Known(rel) => write!(f, "{}", rel),
            Classification::Unknown => write!(f, "?"),
        }
    }
}

/// The canonical timeline for `a rel b`, over the four endpoints of the two
/// intervals.
#[must_use]
pub fn encode(a: IntervalId, b: IntervalId, rel: Relation) -> Timeline {
    let [la, ra] = Endpoint::both(a);
    let [lb, rb] = Endpoint::both(b);
    let moments: Vec<Vec<Endpoint>> = match rel {
        Relation::Before => vec![vec![la], vec![ra], vec![lb], vec![rb]],
        Relation::Meets => vec![vec![la], vec![ra, lb], vec![rb]],
        Relation::Overlaps => vec![vec![la], vec![lb], vec![ra], vec![rb]],
        Relation::FinishedBy => vec![vec![la], vec![lb], vec![ra, rb]],
        Relation::Contains => vec![vec![la], vec![lb], vec![rb], vec![ra]],
        Relation::Starts => vec![vec![la, lb], vec![ra], vec![rb]],
        Relation::Equals => vec![vec![la, lb], vec![ra, rb]],
        Relation::StartedBy => vec![vec![la, lb], vec![rb], vec![ra]],
        Relation::During => vec![vec![lb], vec![la], vec![ra], vec![rb]],
        Relation::Finishes => vec![vec![lb], vec![la], vec![ra, rb]],
        Relation::OverlappedBy => vec![vec![lb], vec![la], vec![rb], vec![ra]],
        Relation::MetBy => vec![vec![lb], vec![rb, la], vec![ra]],
        Relation::After => vec![vec![lb], vec![rb], vec![la], vec![ra]],
    };
    Timeline::from_labels(moments)
}

/// Same as `encode`, for a relation given as a string code.
pub fn encode_code(a: IntervalId, b: IntervalId, code: &str) -> Result<Timeline> {
    Ok(encode(a, b, Relation::parse(code)?))
}

/// Recognize which relation holds between `a` and `b` in the timeline.
/// The timeline must be built over exactly the four endpoints of `a` and
/// `b`, otherwise `Unknown` is returned.
#[must_use]
pub fn classify(timeline: &Timeline, a: IntervalId, b: IntervalId) -> Classification {
    let [la, ra] = Endpoint::both(a);
    let [lb, rb] = Endpoint::both(b);
    if a == b
        || timeline.validate().is_err()
        || timeline.vocabulary() != Vocabulary::from([la, ra, lb, rb])
    {
        return Classification::Unknown;
    }

    let (Some(pla), Some(pra), Some(plb), Some(prb)) = (
        timeline.position(&la),
        timeline.position(&ra),
        timeline.position(&lb),
        timeline.position(&rb),
    ) else {
        return Classification::Unknown;
    };

    // Degenerate intervals have no Allen relation
    if pla >= pra || plb >= prb {
        return Classification::Unknown;
    }

    // Since each interval is well-formed, the relative order of its
    // endpoints with the other interval's endpoints determines the shape.
    let rel = match (
        pra.cmp(&plb),
        pla.cmp(&prb),
        pla.cmp(&plb),
        pra.cmp(&prb),
    ) {
        (Ordering::Less, _, _, _) => Relation::Before,
        (Ordering::Equal, _, _, _) => Relation::Meets,
        (_, Ordering::Greater, _, _) => Relation::After,
        (_, Ordering::Equal, _, _) => Relation::MetBy,
        (Ordering::Greater, Ordering::Less, Ordering::Less, Ordering::Less) => {
            Relation::Overlaps
        }
        (Ordering::Greater, Ordering::Less, Ordering::Less, Ordering::Equal) => {
            Relation::FinishedBy
        }
        (Ordering::Greater, Ordering::Less, Ordering::Less, Ordering::Greater) => {
            Relation::Contains
        }
        (Ordering::Greater, Ordering::Less, Ordering::Equal, Ordering::Less) => {
            Relation::Starts
        }
        (Ordering::Greater, Ordering::Less, Ordering::Equal, Ordering::Equal) => {
            Relation::Equals
        }
        (Ordering::Greater, Ordering::Less, Ordering::Equal, Ordering::Greater) => {
            Relation::StartedBy
        }
        (Ordering::Greater, Ordering::Less, Ordering::Greater, Ordering::Less) => {
            Relation::During
        }
        (Ordering::Greater, Ordering::Less, Ordering::Greater, Ordering::Equal) => {
            Relation::Finishes
        }
        (Ordering::Greater, Ordering::Less, Ordering::Greater, Ordering::Greater) => {
            Relation::OverlappedBy
        }
    };
    Classification::Known(rel)
}

#[cfg(test)]
mod test {
    use crate::codec::{classify, encode, encode_code, Classification};
    use crate::endpoints::{Endpoint, IntervalId};
    use crate::relations::Relation;
    use crate::timelines::Timeline;
    use crate::Error;

    const A: IntervalId = IntervalId(0);
    const B: IntervalId = IntervalId(1);

    #[test]
    fn test_shapes() {
        assert_eq!(
            encode(A, B, Relation::Before).to_string(),
            "[{l0}, {r0}, {l1}, {r1}]"
        );
        assert_eq!(
            encode(A, B, Relation::Meets).to_string(),
            "[{l0}, {r0, l1}, {r1}]"
        );
        assert_eq!(
            encode(A, B, Relation::Equals).to_string(),
            "[{l0, l1}, {r0, r1}]"
        );
        assert_eq!(
            encode(A, B, Relation::MetBy).to_string(),
            "[{l1}, {l0, r1}, {r0}]"
        );

        for rel in Relation::ALL {
            let t = encode(A, B, rel);
            assert!(t.validate().is_ok());
            assert!((2..=4).contains(&t.len()), "{rel}: {t}");
        }
    }

    #[test]
    fn test_shapes_are_distinct() {
        for r1 in Relation::ALL {
            for r2 in Relation::ALL {
                assert_eq!(r1 == r2, encode(A, B, r1) == encode(A, B, r2));
            }
        }
    }

    #[test]
    fn test_roundtrip() {
        for rel in Relation::ALL {
            assert_eq!(
                classify(&encode(A, B, rel), A, B),
                Classification::Known(rel)
            );
            // Seen from the other interval, we get the inverse relation
            assert_eq!(
                classify(&encode(A, B, rel), B, A),
                Classification::Known(rel.inverse())
            );
            // And the encoding is symmetric in the same way
            assert_eq!(encode(A, B, rel), encode(B, A, rel.inverse()));
        }
    }

    #[test]
    fn test_unknown() {
        let [l0, r0] = Endpoint::both(A);
        let [l1, r1] = Endpoint::both(B);
        let l2 = Endpoint::left(IntervalId(2));

        // An interval that ends before it starts
        let reversed = Timeline::from_labels([vec![r0], vec![l0], vec![l1], vec![r1]]);
        assert_eq!(classify(&reversed, A, B), Classification::Unknown);

        // An interval reduced to a point
        let point = Timeline::from_labels([vec![l0, r0], vec![l1], vec![r1]]);
        assert_eq!(classify(&point, A, B), Classification::Unknown);

        // Missing and extra labels
        let partial = Timeline::from_labels([vec![l0], vec![r0], vec![l1]]);
        assert_eq!(classify(&partial, A, B), Classification::Unknown);
        let extra =
            Timeline::from_labels([vec![l0], vec![r0], vec![l1, l2], vec![r1]]);
        assert_eq!(classify(&extra, A, B), Classification::Unknown);

        // Wrong pair of intervals
        assert_eq!(
            classify(&encode(A, B, Relation::Before), A, IntervalId(2)),
            Classification::Unknown
        );
        assert_eq!(
            classify(&encode(A, B, Relation::Before), A, A),
            Classification::Unknown
        );
        assert_eq!(Classification::Unknown.relation(), None);
    }

    #[test]
    fn test_encode_code() {
        assert_eq!(
            encode_code(A, B, "o").unwrap(),
            encode(A, B, Relation::Overlaps)
        );
        assert_eq!(
            encode_code(A, B, "di").unwrap(),
            encode(A, B, Relation::Contains)
        );
        assert!(matches!(
            encode_code(A, B, "zz"),
            Err(Error::UnrecognizedRelation(_))
        ));
    }
}
