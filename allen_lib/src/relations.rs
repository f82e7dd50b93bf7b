//! Allen's thirteen basic relations between two intervals, using the
//! one-letter notation of T. Alspaugh: lowercase codes and their uppercase
//! inverse, with `e` (equals) being its own inverse.
//!
//! ```text
//!    p  X before Y          [X]  [Y]
//!    m  X meets Y           [X][Y]
//!    o  X overlaps Y        [X [ ] Y]
//!    F  X finished by Y     [X [Y]]
//!    D  X contains Y        [X [Y] ]
//!    s  X starts Y          [[X] Y]
//!    e  X equals Y          [X=Y]
//! ```
//! and the inverses `S`, `d`, `f`, `O`, `M`, `P`.

use crate::{Error, Result};
use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Relation {
    Before,
    Meets,
    Overlaps,
    FinishedBy,
    Contains,
    Starts,
    Equals,
    StartedBy,
    During,
    Finishes,
    OverlappedBy,
    MetBy,
    After,
}

impl Relation {
    /// All relations, in the canonical order of Alspaugh's tables
    pub const ALL: [Relation; 13] = [
        Relation::Before,
        Relation::Meets,
        Relation::Overlaps,
        Relation::FinishedBy,
        Relation::Contains,
        Relation::Starts,
        Relation::Equals,
        Relation::StartedBy,
        Relation::During,
        Relation::Finishes,
        Relation::OverlappedBy,
        Relation::MetBy,
        Relation::After,
    ];

    /// Position in the canonical order, between 0 and 12
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The one-letter code
    #[must_use]
    pub fn code(self) -> char {
        match self {
            Relation::Before => 'p',
            Relation::Meets => 'm',
            Relation::Overlaps => 'o',
            Relation::FinishedBy => 'F',
            Relation::Contains => 'D',
            Relation::Starts => 's',
            Relation::Equals => 'e',
            Relation::StartedBy => 'S',
            Relation::During => 'd',
            Relation::Finishes => 'f',
            Relation::OverlappedBy => 'O',
            Relation::MetBy => 'M',
            Relation::After => 'P',
        }
    }

    /// The code in Allen's original 1983 notation
    #[must_use]
    pub fn legacy_code(self) -> &'static str {
        match self {
            Relation::Before => "b",
            Relation::Meets => "m",
            Relation::Overlaps => "o",
            Relation::FinishedBy => "fi",
            Relation::Contains => "di",
            Relation::Starts => "s",
            Relation::Equals => "eq",
            Relation::StartedBy => "si",
            Relation::During => "d",
            Relation::Finishes => "f",
            Relation::OverlappedBy => "oi",
            Relation::MetBy => "mi",
            Relation::After => "bi",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Relation::Before => "Before",
            Relation::Meets => "Meets",
            Relation::Overlaps => "Overlaps",
            Relation::FinishedBy => "Finished-by",
            Relation::Contains => "Contains",
            Relation::Starts => "Starts",
            Relation::Equals => "Equals",
            Relation::StartedBy => "Started-by",
            Relation::During => "During",
            Relation::Finishes => "Finishes",
            Relation::OverlappedBy => "Overlapped-by",
            Relation::MetBy => "Met-by",
            Relation::After => "After",
        }
    }

    /// If X self Y, then Y self.inverse() X
    #[must_use]
    pub fn inverse(self) -> Relation {
        match self {
            Relation::Before => Relation::After,
            Relation::Meets => Relation::MetBy,
            Relation::Overlaps => Relation::OverlappedBy,
            Relation::FinishedBy => Relation::Finishes,
            Relation::Contains => Relation::During,
            Relation::Starts => Relation::StartedBy,
            Relation::Equals => Relation::Equals,
            Relation::StartedBy => Relation::Starts,
            Relation::During => Relation::Contains,
            Relation::Finishes => Relation::FinishedBy,
            Relation::OverlappedBy => Relation::Overlaps,
            Relation::MetBy => Relation::Meets,
            Relation::After => Relation::Before,
        }
    }

    /// Parse a relation.  This accepts Alspaugh's one-letter codes (which are
    /// case sensitive), Allen's original codes ("b", "fi", "eq",...) and the
    /// full names, case-insensitive ("finished-by", "Overlapped by",...).
    pub fn parse(code: &str) -> Result<Self> {
        let code = code.trim();
        if let Some(rel) = Relation::ALL
            .into_iter()
            .find(|r| code.len() == 1 && code.starts_with(r.code()))
        {
            return Ok(rel);
        }
        if let Some(rel) =
            Relation::ALL.into_iter().find(|r| r.legacy_code() == code)
        {
            return Ok(rel);
        }
        let normalized = code.to_lowercase().replace([' ', '_'], "-");
        Relation::ALL
            .into_iter()
            .find(|r| r.name().to_lowercase() == normalized)
            .ok_or_else(|| Error::UnrecognizedRelation(code.to_string()))
    }
}

impl std::str::FromStr for Relation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Relation::parse(s)
    }
}

impl TryFrom<char> for Relation {
    type Error = Error;

    fn try_from(code: char) -> Result<Self> {
        Relation::ALL
            .into_iter()
            .find(|r| r.code() == code)
            .ok_or_else(|| Error::UnrecognizedRelation(code.to_string()))
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Serialize for Relation {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_char(self.code())
    }
}

impl<'de> Deserialize<'de> for Relation {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Relation::parse(&code).map_err(serde::de::Error::custom)
    }
}

/// A set of relations, typically the result of a composition.
/// Iteration follows the canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RelationSet {
    mask: u16,
}

impl RelationSet {
    #[must_use]
    pub fn empty() -> Self {
        RelationSet { mask: 0 }
    }

    /// The set of all thirteen relations
    #[must_use]
    pub fn full() -> Self {
        Relation::ALL.into_iter().collect()
    }

    #[must_use]
    pub fn single(rel: Relation) -> Self {
        RelationSet {
            mask: 1 << rel.index(),
        }
    }

    pub fn insert(&mut self, rel: Relation) {
        self.mask |= 1 << rel.index();
    }

    #[must_use]
    pub fn contains(&self, rel: Relation) -> bool {
        self.mask & (1 << rel.index()) != 0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len() == Relation::ALL.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Relation> + '_ {
        Relation::ALL.into_iter().filter(|r| self.contains(*r))
    }

    /// The set of inverses of each relation in self
    #[must_use]
    pub fn inverse(&self) -> RelationSet {
        self.iter().map(Relation::inverse).collect()
    }

    /// The codes of all relations, concatenated ("pmo")
    #[must_use]
    pub fn codes(&self) -> String {
        self.iter().map(Relation::code).collect()
    }

    /// Parse a string of one-letter codes, as produced by `codes()`
    pub fn parse_codes(codes: &str) -> Result<Self> {
        codes.chars().map(Relation::try_from).collect()
    }
}

impl FromIterator<Relation> for RelationSet {
    fn from_iter<I: IntoIterator<Item = Relation>>(iter: I) -> Self {
        let mut result = RelationSet::empty();
        for rel in iter {
            result.insert(rel);
        }
        result
    }
}

impl Extend<Relation> for RelationSet {
    fn extend<I: IntoIterator<Item = Relation>>(&mut self, iter: I) {
        for rel in iter {
            self.insert(rel);
        }
    }
}

impl std::fmt::Display for RelationSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.iter().join(", "))
    }
}

impl Serialize for RelationSet {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.codes())
    }
}

impl<'de> Deserialize<'de> for RelationSet {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let codes = String::deserialize(deserializer)?;
        RelationSet::parse_codes(&codes).map_err(serde::de::Error::custom)
    }
}
