//! Result sorting for query execution
//!
//! Orders the working list of record references by one field. The store's
//! own collection is never reordered.

use std::cmp::Ordering;

use serde_json::Value;

use crate::catalog::{FieldPath, Record};
use crate::planner::SortOrder;

/// Sorts record references
pub struct ResultSorter;

/// Comparable view of a field value
#[derive(Debug, Clone, PartialEq)]
enum SortKey<'a> {
    Bool(bool),
    Number(f64),
    Text(&'a str),
    /// Objects and arrays, compared by their JSON text
    Composite(String),
}

impl<'a> SortKey<'a> {
    /// Missing and null fields sort as the number zero
    fn of(value: Option<&'a Value>) -> Self {
        match value {
            None | Some(Value::Null) => SortKey::Number(0.0),
            Some(Value::Bool(b)) => SortKey::Bool(*b),
            Some(Value::Number(n)) => SortKey::Number(n.as_f64().unwrap_or(0.0)),
            Some(Value::String(s)) => SortKey::Text(s),
            Some(other) => SortKey::Composite(other.to_string()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortKey::Bool(_) => 0,
            SortKey::Number(_) => 1,
            SortKey::Text(_) => 2,
            SortKey::Composite(_) => 3,
        }
    }

    /// Natural ordering within a type. Across types the order is by type
    /// rank, which is an implementation choice callers must not rely on.
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Bool(a), SortKey::Bool(b)) => a.cmp(b),
            (SortKey::Number(a), SortKey::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Composite(a), SortKey::Composite(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl ResultSorter {
    /// Sorts `records` by `field`. A missing or empty field name is a no-op.
    ///
    /// The sort is stable, so records with equal keys keep their incoming
    /// relative order in both directions.
    pub fn sort(records: &mut [&Record], field: Option<&str>, order: SortOrder) {
        let field = match field {
            Some(f) if !f.is_empty() => f,
            _ => return,
        };
        let path = FieldPath::parse(field);

        records.sort_by(|a, b| {
            let ordering = SortKey::of(a.resolve(&path)).compare(&SortKey::of(b.resolve(&path)));
            match order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        tracing::debug!(field, order = order.as_str(), "sort applied");
    }
}
