use crate::endpoints::Endpoint;
use crate::{Error, Result};
use itertools::Itertools;
use std::collections::BTreeSet;

/// The set of labels a timeline talks about.
pub type Vocabulary = BTreeSet<Endpoint>;

/// A simultaneity class: labels that occur at the same instant.
/// A well-formed timeline never contains an empty moment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Moment {
    labels: BTreeSet<Endpoint>,
}

impl Moment {
    #[must_use]
    pub fn new(labels: impl IntoIterator<Item = Endpoint>) -> Self {
        Moment {
            labels: labels.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn contains(&self, label: &Endpoint) -> bool {
        self.labels.contains(label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Endpoint> + '_ {
        self.labels.iter()
    }

    /// The labels of self that also belong to `voc`
    #[must_use]
    pub fn intersection(&self, voc: &Vocabulary) -> Moment {
        Moment {
            labels: self.labels.intersection(voc).copied().collect(),
        }
    }

    /// Whether no label of self belongs to `voc`
    #[must_use]
    pub fn is_disjoint(&self, voc: &Vocabulary) -> bool {
        self.labels.is_disjoint(voc)
    }

    #[must_use]
    pub fn is_subset(&self, other: &Moment) -> bool {
        self.labels.is_subset(&other.labels)
    }

    #[must_use]
    pub fn union(&self, other: &Moment) -> Moment {
        Moment {
            labels: self.labels.union(&other.labels).copied().collect(),
        }
    }
}

impl std::fmt::Display for Moment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.labels.iter().join(", "))
    }
}

/// An ordered sequence of moments.  Moments are strictly ordered in time,
/// labels within a moment are simultaneous.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Timeline {
    moments: Vec<Moment>,
}

impl Timeline {
    #[must_use]
    pub fn new(moments: Vec<Moment>) -> Self {
        Timeline { moments }
    }

    /// Build a timeline from lists of simultaneous labels.  Mostly useful
    /// for literal timelines.
    #[must_use]
    pub fn from_labels<M>(moments: impl IntoIterator<Item = M>) -> Self
    where
        M: IntoIterator<Item = Endpoint>,
    {
        Timeline {
            moments: moments.into_iter().map(Moment::new).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moments.is_empty()
    }

    #[must_use]
    pub fn moments(&self) -> &[Moment] {
        &self.moments
    }

    pub fn iter(&self) -> impl Iterator<Item = &Moment> + '_ {
        self.moments.iter()
    }

    /// All labels mentioned in the timeline
    #[must_use]
    pub fn vocabulary(&self) -> Vocabulary {
        self.moments
            .iter()
            .flat_map(|m| m.iter().copied())
            .collect()
    }

    /// Index of the moment that contains `label`, if any
    #[must_use]
    pub fn position(&self, label: &Endpoint) -> Option<usize> {
        self.moments.iter().position(|m| m.contains(label))
    }

    /// Check the structural invariants: no empty moment, and each label
    /// occupies a single position in time.
    pub fn validate(&self) -> Result<()> {
        let mut seen = Vocabulary::new();
        for (idx, moment) in self.moments.iter().enumerate() {
            if moment.is_empty() {
                return Err(Error::MalformedTimeline(format!(
                    "empty moment at position {} in {}",
                    idx, self
                )));
            }
            for label in moment.iter() {
                if !seen.insert(*label) {
                    return Err(Error::MalformedTimeline(format!(
                        "{} appears more than once in {}",
                        label, self
                    )));
                }
            }
        }
        Ok(())
    }
}

impl FromIterator<Moment> for Timeline {
    fn from_iter<I: IntoIterator<Item = Moment>>(iter: I) -> Self {
        Timeline {
            moments: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Timeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.moments.iter().join(", "))
    }
}

#[cfg(test)]
mod test {
    use crate::endpoints::{Endpoint, IntervalId};
    use crate::timelines::{Moment, Timeline, Vocabulary};
    use crate::Error;

    #[test]
    fn test_vocabulary() {
        let l0 = Endpoint::left(IntervalId(0));
        let r0 = Endpoint::right(IntervalId(0));
        let l1 = Endpoint::left(IntervalId(1));
        let r1 = Endpoint::right(IntervalId(1));

        let t = Timeline::from_labels([vec![l0], vec![r0, l1], vec![r1]]);
        assert_eq!(t.len(), 3);
        assert_eq!(t.vocabulary(), Vocabulary::from([l0, r0, l1, r1]));
        assert_eq!(t.position(&l1), Some(1));
        assert_eq!(t.position(&Endpoint::left(IntervalId(7))), None);
        assert!(Timeline::default().vocabulary().is_empty());
    }

    #[test]
    fn test_moment_sets() {
        let l0 = Endpoint::left(IntervalId(0));
        let r0 = Endpoint::right(IntervalId(0));
        let l1 = Endpoint::left(IntervalId(1));

        let m = Moment::new([r0, l1]);
        assert_eq!(m.intersection(&Vocabulary::from([l1])), Moment::new([l1]));
        assert!(m.intersection(&Vocabulary::from([l0])).is_empty());
        assert!(m.is_disjoint(&Vocabulary::from([l0])));
        assert!(!m.is_disjoint(&Vocabulary::from([l0, r0])));
        assert!(Moment::new([l1]).is_subset(&m));
        assert!(!m.is_subset(&Moment::new([l1])));
        assert_eq!(Moment::new([l0]).union(&m), Moment::new([l0, r0, l1]));
    }

    #[test]
    fn test_validate() {
        let l0 = Endpoint::left(IntervalId(0));
        let r0 = Endpoint::right(IntervalId(0));

        assert!(Timeline::from_labels([vec![l0], vec![r0]]).validate().is_ok());
        assert!(Timeline::default().validate().is_ok());

        let dup = Timeline::from_labels([vec![l0], vec![r0, l0]]);
        assert!(matches!(dup.validate(), Err(Error::MalformedTimeline(_))));

        let empty = Timeline::from_labels([vec![l0], vec![], vec![r0]]);
        assert!(matches!(empty.validate(), Err(Error::MalformedTimeline(_))));
    }

    #[test]
    fn test_display() {
        let l0 = Endpoint::left(IntervalId(0));
        let r0 = Endpoint::right(IntervalId(0));
        let l1 = Endpoint::left(IntervalId(1));
        let t = Timeline::from_labels([vec![l0], vec![l1, r0]]);
        assert_eq!(t.to_string(), "[{l0}, {r0, l1}]");
        assert_eq!(Timeline::default().to_string(), "[]");
    }
}
