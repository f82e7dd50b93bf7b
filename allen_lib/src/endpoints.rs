/// Identifies one of the intervals we reason about.  Intervals have no
/// extent of their own, they only exist through their two endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IntervalId(pub u8);

impl std::fmt::Display for IntervalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Left,  //  start of the interval
    Right, //  end of the interval
}

/// A symbolic boundary of an interval.
/// Labels carry no position: all ordering information lives in the timeline
/// that contains them.  The derived `Ord` is only used to store labels in
/// sets, it says nothing about time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Endpoint {
    pub interval: IntervalId,
    pub side: Side,
}

impl Endpoint {
    /// The start of `interval`
    #[must_use]
    pub fn left(interval: IntervalId) -> Self {
        Endpoint {
            interval,
            side: Side::Left,
        }
    }

    /// The end of `interval`
    #[must_use]
    pub fn right(interval: IntervalId) -> Self {
        Endpoint {
            interval,
            side: Side::Right,
        }
    }

    /// Both endpoints of an interval, start first.
    #[must_use]
    pub fn both(interval: IntervalId) -> [Self; 2] {
        [Endpoint::left(interval), Endpoint::right(interval)]
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.side {
            Side::Left => write!(f, "l{}", self.interval),
            Side::Right => write!(f, "r{}", self.interval),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::endpoints::{Endpoint, IntervalId, Side};

    #[test]
    fn test_labels() {
        let x = IntervalId(0);
        let y = IntervalId(1);
        assert_eq!(Endpoint::left(x).side, Side::Left);
        assert_eq!(Endpoint::right(x).side, Side::Right);
        assert_eq!(Endpoint::left(x), Endpoint::left(x));
        assert_ne!(Endpoint::left(x), Endpoint::right(x));
        assert_ne!(Endpoint::left(x), Endpoint::left(y));
        assert_eq!(Endpoint::both(y), [Endpoint::left(y), Endpoint::right(y)]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Endpoint::left(IntervalId(0)).to_string(), "l0");
        assert_eq!(Endpoint::right(IntervalId(12)).to_string(), "r12");
    }
}
