//! # Query Parameter Parser
//!
//! Translates flat query-string pairs into a [`QuerySpec`].
//!
//! Reserved keys: `q`, `sortBy`, `order`, `limit`, `skip`. Any other key
//! containing an underscore is split on the first underscore into
//! `<field>_<suffix>`; the suffix picks the operator. Nothing in here
//! fails: malformed or unknown input contributes no filter.

use crate::catalog::parse_number;

use super::ast::{FilterDescriptor, NumericOp, QuerySpec, SortOrder, TextOp, DEFAULT_LIMIT};

pub const PARAM_SEARCH: &str = "q";
pub const PARAM_SORT_BY: &str = "sortBy";
pub const PARAM_ORDER: &str = "order";
pub const PARAM_LIMIT: &str = "limit";
pub const PARAM_SKIP: &str = "skip";

const RESERVED: &[&str] = &[PARAM_SEARCH, PARAM_SORT_BY, PARAM_ORDER, PARAM_LIMIT, PARAM_SKIP];

impl QuerySpec {
    /// Builds a query from decoded query-string pairs.
    ///
    /// A key that appears more than once keeps its last value, in the
    /// position of its first appearance.
    pub fn from_params<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut latest: Vec<(String, String)> = Vec::new();
        for (key, value) in pairs {
            let (key, value) = (key.as_ref(), value.as_ref());
            match latest.iter_mut().find(|(k, _)| k == key) {
                Some(slot) => slot.1 = value.to_string(),
                None => latest.push((key.to_string(), value.to_string())),
            }
        }

        let mut spec = QuerySpec::new();
        for (key, value) in &latest {
            match key.as_str() {
                PARAM_SEARCH => spec = spec.search(value.as_str()),
                PARAM_SORT_BY => {
                    let field = value.trim();
                    spec.sort_field = (!field.is_empty()).then(|| field.to_string());
                }
                PARAM_ORDER => spec.sort_order = SortOrder::parse(value),
                PARAM_LIMIT => spec.limit = parse_limit(value),
                PARAM_SKIP => spec.offset = parse_skip(value),
                _ => {
                    if let Some(descriptor) = parse_filter_key(key, value) {
                        spec.push_filter(descriptor);
                    }
                }
            }
        }
        spec
    }
}

/// Positive integer page size, otherwise the default
pub fn parse_limit(raw: &str) -> usize {
    match raw.trim().parse::<i64>() {
        Ok(n) if n > 0 => usize::try_from(n).unwrap_or(DEFAULT_LIMIT),
        _ => DEFAULT_LIMIT,
    }
}

/// Non-negative integer offset, otherwise zero
pub fn parse_skip(raw: &str) -> usize {
    match raw.trim().parse::<i64>() {
        Ok(n) if n > 0 => usize::try_from(n).unwrap_or(0),
        _ => 0,
    }
}

/// Turns one `<field>_<suffix>=value` pair into a descriptor.
///
/// Returns `None` for reserved keys, keys without an underscore, an empty
/// field name, unknown suffixes, and comparison suffixes whose value is
/// not a number.
pub fn parse_filter_key(key: &str, value: &str) -> Option<FilterDescriptor> {
    if RESERVED.contains(&key) {
        return None;
    }
    let (field, suffix) = key.split_once('_')?;
    if field.is_empty() {
        return None;
    }

    let numeric = parse_number(value).is_some();
    let descriptor = match suffix {
        "like" => FilterDescriptor::text(field, TextOp::Contains, value),
        "not_like" => FilterDescriptor::text(field, TextOp::NotContains, value),
        "starts_with" => FilterDescriptor::text(field, TextOp::BeginsWith, value),
        "ends_with" => FilterDescriptor::text(field, TextOp::EndsWith, value),
        "eq" if numeric => FilterDescriptor::numeric(field, NumericOp::Eq, value),
        "eq" => FilterDescriptor::text(field, TextOp::Equals, value),
        "neq" if numeric => FilterDescriptor::numeric(field, NumericOp::Neq, value),
        "neq" => FilterDescriptor::text(field, TextOp::NotEquals, value),
        "gt" | "lt" | "gte" | "lte" if !numeric => return None,
        "gt" => FilterDescriptor::numeric(field, NumericOp::Gt, value),
        "lt" => FilterDescriptor::numeric(field, NumericOp::Lt, value),
        "gte" => FilterDescriptor::numeric(field, NumericOp::Gte, value),
        "lte" => FilterDescriptor::numeric(field, NumericOp::Lte, value),
        "blank" => FilterDescriptor::text(field, TextOp::IsBlank, ""),
        "not_blank" => FilterDescriptor::text(field, TextOp::IsNotBlank, ""),
        // Unknown suffixes are tolerated so stale clients keep working
        _ => return None,
    };
    Some(descriptor)
}
