use crate::composition::CompositionTable;
use crate::relations::{Relation, RelationSet};
use crate::{Error, Result};
use itertools::{iproduct, Itertools};
use log::debug;

/// Look for entries of the table that break the laws of the algebra:
///    * every composition is non-empty
///    * `e` is a neutral element on both sides
///    * inv(r1 ∘ r2) = inv(r2) ∘ inv(r1)
#[must_use]
pub fn violations(table: &CompositionTable) -> Vec<String> {
    let mut result = Vec::new();

    for (first, second, set) in table.iter() {
        if set.is_empty() {
            result.push(format!("{}∘{} is empty", first, second));
        }
    }

    for rel in Relation::ALL {
        let expected = RelationSet::single(rel);
        let left = table.get(Relation::Equals, rel);
        if left != expected {
            result.push(format!("e∘{} is {}, expected {}", rel, left, expected));
        }
        let right = table.get(rel, Relation::Equals);
        if right != expected {
            result.push(format!("{}∘e is {}, expected {}", rel, right, expected));
        }
    }

    for (first, second) in iproduct!(Relation::ALL, Relation::ALL) {
        let expected = table.get(first, second).inverse();
        let actual = table.get(second.inverse(), first.inverse());
        if actual != expected {
            result.push(format!(
                "{}∘{} is {}, expected {} as the inverse of {}∘{}",
                second.inverse(),
                first.inverse(),
                actual,
                expected,
                first,
                second,
            ));
        }
    }

    debug!("checked composition table: {} violations", result.len());
    result
}

/// Check the table, and report all violations as a single error
pub fn check_table(table: &CompositionTable) -> Result<()> {
    let found = violations(table);
    if found.is_empty() {
        Ok(())
    } else {
        Err(Error::AlgebraViolation(found.iter().join("\n")))
    }
}
