//! Predicate filtering for query execution
//!
//! Global search first, then column filters as a strict left fold: each
//! filter narrows the candidates left by the one before it. AND is the only
//! combinator. Input records are never modified; only the working list of
//! references shrinks.

use crate::catalog::{fold, number_of, parse_number, text_of, FieldPath, Record};
use crate::planner::{FilterDescriptor, FilterOp, NumericOp, TextOp};

/// A descriptor with its values parsed once, ready to test records
#[derive(Debug, Clone, PartialEq)]
pub enum CompiledFilter {
    /// Keeps every record
    Pass,
    /// Keeps no record
    Reject,
    Text {
        path: FieldPath,
        op: TextOp,
        /// Folded filter value
        needle: String,
    },
    Numeric {
        path: FieldPath,
        op: NumericOp,
        bound: f64,
        upper: Option<f64>,
    },
}

impl CompiledFilter {
    /// Compiles a descriptor, applying the malformed-input policy:
    ///
    /// - text operators with a blank value keep everything (blank checks
    ///   excepted, they never look at the value)
    /// - numeric operators whose value is not a number keep everything
    /// - `between` whose upper bound is missing or not a number keeps nothing
    /// - unrecognized operators keep everything
    pub fn compile(descriptor: &FilterDescriptor) -> Self {
        let path = FieldPath::parse(&descriptor.field);
        match &descriptor.op {
            FilterOp::Text(op) => {
                let needle = fold(&descriptor.value);
                if op.takes_value() && needle.is_empty() {
                    return CompiledFilter::Pass;
                }
                CompiledFilter::Text { path, op: *op, needle }
            }
            FilterOp::Numeric(op) => {
                let Some(bound) = parse_number(&descriptor.value) else {
                    return CompiledFilter::Pass;
                };
                let upper = descriptor.value2.as_deref().and_then(parse_number);
                if *op == NumericOp::Between && upper.is_none() {
                    return CompiledFilter::Reject;
                }
                CompiledFilter::Numeric {
                    path,
                    op: *op,
                    bound,
                    upper,
                }
            }
            FilterOp::Unrecognized(_) => CompiledFilter::Pass,
        }
    }

    /// Tests one record
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            CompiledFilter::Pass => true,
            CompiledFilter::Reject => false,
            CompiledFilter::Text { path, op, needle } => {
                let actual = fold(&text_of(record.resolve(path)));
                text_match(&actual, *op, needle)
            }
            CompiledFilter::Numeric {
                path,
                op,
                bound,
                upper,
            } => match number_of(record.resolve(path)) {
                // Absent or non-numeric field values fail every numeric operator
                None => false,
                Some(actual) => numeric_match(actual, *op, *bound, *upper),
            },
        }
    }
}

fn text_match(actual: &str, op: TextOp, needle: &str) -> bool {
    match op {
        TextOp::Contains => actual.contains(needle),
        TextOp::NotContains => !actual.contains(needle),
        TextOp::BeginsWith => actual.starts_with(needle),
        TextOp::EndsWith => actual.ends_with(needle),
        TextOp::Equals => actual == needle,
        TextOp::NotEquals => actual != needle,
        TextOp::IsBlank => actual.is_empty(),
        TextOp::IsNotBlank => !actual.is_empty(),
    }
}

fn numeric_match(actual: f64, op: NumericOp, bound: f64, upper: Option<f64>) -> bool {
    match op {
        NumericOp::Eq => actual == bound,
        NumericOp::Neq => actual != bound,
        NumericOp::Gt => actual > bound,
        NumericOp::Lt => actual < bound,
        NumericOp::Gte => actual >= bound,
        NumericOp::Lte => actual <= bound,
        NumericOp::Between => upper.is_some_and(|high| bound <= actual && actual <= high),
    }
}

/// Evaluates search terms and column filters against records
pub struct PredicateFilter;

impl PredicateFilter {
    /// Global search then every column filter, in order
    pub fn apply<'a>(
        records: Vec<&'a Record>,
        global_search: Option<&str>,
        filters: &[FilterDescriptor],
    ) -> Vec<&'a Record> {
        let records = Self::apply_search(records, global_search);
        Self::apply_filters(records, filters)
    }

    /// Keeps records where any top-level value contains the term.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace on
    /// both sides. A blank or absent term keeps everything.
    pub fn apply_search<'a>(mut records: Vec<&'a Record>, term: Option<&str>) -> Vec<&'a Record> {
        let term = match term.map(fold) {
            Some(t) if !t.is_empty() => t,
            _ => return records,
        };
        records.retain(|record| Self::matches_search(record, &term));
        tracing::debug!(term = %term, remaining = records.len(), "global search applied");
        records
    }

    /// `term` must already be folded
    pub fn matches_search(record: &Record, term: &str) -> bool {
        record
            .values()
            .any(|value| fold(&text_of(Some(value))).contains(term))
    }

    /// Narrows the candidates by each filter in turn
    pub fn apply_filters<'a>(
        mut records: Vec<&'a Record>,
        filters: &[FilterDescriptor],
    ) -> Vec<&'a Record> {
        for descriptor in filters {
            let compiled = CompiledFilter::compile(descriptor);
            records.retain(|record| compiled.matches(record));
            tracing::debug!(
                field = %descriptor.field,
                op = %descriptor.op,
                value = %descriptor.value,
                remaining = records.len(),
                "filter applied"
            );
        }
        records
    }

    /// Checks if a record matches all filters
    pub fn matches(record: &Record, filters: &[FilterDescriptor]) -> bool {
        filters
            .iter()
            .all(|descriptor| CompiledFilter::compile(descriptor).matches(record))
    }
}
