//! Query structures
//!
//! Defines the parsed, structured form of a catalog query: column filter
//! descriptors, sort intent and the pagination window.

use std::fmt;

/// Page size used when the client gives none (or a non-positive one)
pub const DEFAULT_LIMIT: usize = 10;

/// Text-family operators. Both sides are trimmed and lowercased first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextOp {
    Contains,
    NotContains,
    BeginsWith,
    EndsWith,
    Equals,
    NotEquals,
    IsBlank,
    IsNotBlank,
}

impl TextOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextOp::Contains => "contains",
            TextOp::NotContains => "not_contains",
            TextOp::BeginsWith => "begins_with",
            TextOp::EndsWith => "ends_with",
            TextOp::Equals => "equals",
            TextOp::NotEquals => "not_equals",
            TextOp::IsBlank => "is_blank",
            TextOp::IsNotBlank => "is_not_blank",
        }
    }

    /// Blank checks ignore the filter value entirely
    pub fn takes_value(&self) -> bool {
        !matches!(self, TextOp::IsBlank | TextOp::IsNotBlank)
    }
}

/// Numeric-family operators. The field value is coerced to a float first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericOp {
    Eq,
    Neq,
    Gt,
    Lt,
    Gte,
    Lte,
    /// Inclusive on both ends; uses `value` and `value2`
    Between,
}

impl NumericOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            NumericOp::Eq => "eq",
            NumericOp::Neq => "neq",
            NumericOp::Gt => "gt",
            NumericOp::Lt => "lt",
            NumericOp::Gte => "gte",
            NumericOp::Lte => "lte",
            NumericOp::Between => "between",
        }
    }
}

/// Operator of a column filter. Each operator belongs to exactly one family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOp {
    Text(TextOp),
    Numeric(NumericOp),
    /// An operator name nothing here understands. Always passes, so callers
    /// built against a newer operator vocabulary keep working.
    Unrecognized(String),
}

impl FilterOp {
    /// Resolves an operator by its descriptor name (`contains`, `gte`,
    /// `between`, ...). Unknown names become [`FilterOp::Unrecognized`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "contains" => FilterOp::Text(TextOp::Contains),
            "not_contains" => FilterOp::Text(TextOp::NotContains),
            "begins_with" => FilterOp::Text(TextOp::BeginsWith),
            "ends_with" => FilterOp::Text(TextOp::EndsWith),
            "equals" => FilterOp::Text(TextOp::Equals),
            "not_equals" => FilterOp::Text(TextOp::NotEquals),
            "is_blank" => FilterOp::Text(TextOp::IsBlank),
            "is_not_blank" => FilterOp::Text(TextOp::IsNotBlank),
            "eq" => FilterOp::Numeric(NumericOp::Eq),
            "neq" => FilterOp::Numeric(NumericOp::Neq),
            "gt" => FilterOp::Numeric(NumericOp::Gt),
            "lt" => FilterOp::Numeric(NumericOp::Lt),
            "gte" => FilterOp::Numeric(NumericOp::Gte),
            "lte" => FilterOp::Numeric(NumericOp::Lte),
            "between" => FilterOp::Numeric(NumericOp::Between),
            other => FilterOp::Unrecognized(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FilterOp::Text(op) => op.as_str(),
            FilterOp::Numeric(op) => op.as_str(),
            FilterOp::Unrecognized(name) => name,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, FilterOp::Text(_))
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, FilterOp::Numeric(_))
    }
}

impl fmt::Display for FilterOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One column constraint
#[derive(Debug, Clone, PartialEq)]
pub struct FilterDescriptor {
    /// Field name; `rating.rate` addresses the nested rating
    pub field: String,
    pub op: FilterOp,
    pub value: String,
    /// Upper bound for `between`
    pub value2: Option<String>,
}

impl FilterDescriptor {
    pub fn new(field: impl Into<String>, op: FilterOp, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            op,
            value: value.into(),
            value2: None,
        }
    }

    pub fn text(field: impl Into<String>, op: TextOp, value: impl Into<String>) -> Self {
        Self::new(field, FilterOp::Text(op), value)
    }

    pub fn numeric(field: impl Into<String>, op: NumericOp, value: impl Into<String>) -> Self {
        Self::new(field, FilterOp::Numeric(op), value)
    }

    /// Inclusive range filter. Only reachable in-process; the query string
    /// encodes ranges as independent `_gte` / `_lte` filters.
    pub fn between(
        field: impl Into<String>,
        low: impl Into<String>,
        high: impl Into<String>,
    ) -> Self {
        Self {
            value2: Some(high.into()),
            ..Self::numeric(field, NumericOp::Between, low)
        }
    }

    /// True when `other` constrains the same field with the same operator
    pub fn same_slot(&self, other: &FilterDescriptor) -> bool {
        self.field == other.field && self.op == other.op
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// `desc` (any case) is descending; everything else is ascending
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("desc") {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// The full parsed intent of one request. Built once, read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySpec {
    pub global_search: Option<String>,
    /// Applied left to right, all must pass
    pub filters: Vec<FilterDescriptor>,
    pub sort_field: Option<String>,
    pub sort_order: SortOrder,
    /// Always > 0
    pub limit: usize,
    pub offset: usize,
}

impl Default for QuerySpec {
    fn default() -> Self {
        Self {
            global_search: None,
            filters: Vec::new(),
            sort_field: None,
            sort_order: SortOrder::Asc,
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl QuerySpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the global search term; blank terms clear it
    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.global_search = if term.trim().is_empty() { None } else { Some(term) };
        self
    }

    /// Adds a filter, replacing any earlier one for the same field and operator
    pub fn filter(mut self, descriptor: FilterDescriptor) -> Self {
        self.push_filter(descriptor);
        self
    }

    pub fn sort_by(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        let field = field.into();
        self.sort_field = if field.is_empty() { None } else { Some(field) };
        self.sort_order = order;
        self
    }

    /// Sets the pagination window; a zero limit falls back to the default
    pub fn page(mut self, limit: usize, offset: usize) -> Self {
        self.limit = if limit == 0 { DEFAULT_LIMIT } else { limit };
        self.offset = offset;
        self
    }

    pub(crate) fn push_filter(&mut self, descriptor: FilterDescriptor) {
        match self.filters.iter_mut().find(|f| f.same_slot(&descriptor)) {
            Some(existing) => *existing = descriptor,
            None => self.filters.push(descriptor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_names_round_trip_through_from_name() {
        for name in ["contains", "is_not_blank", "eq", "between"] {
            assert_eq!(FilterOp::from_name(name).name(), name);
        }
        assert_eq!(
            FilterOp::from_name("regex"),
            FilterOp::Unrecognized("regex".to_string())
        );
    }

    #[test]
    fn test_operator_families_are_disjoint() {
        let text = FilterOp::from_name("equals");
        let numeric = FilterOp::from_name("eq");
        assert!(text.is_text() && !text.is_numeric());
        assert!(numeric.is_numeric() && !numeric.is_text());
    }

    #[test]
    fn test_between_descriptor() {
        let d = FilterDescriptor::between("price", "10", "20");
        assert_eq!(d.op, FilterOp::Numeric(NumericOp::Between));
        assert_eq!(d.value, "10");
        assert_eq!(d.value2.as_deref(), Some("20"));
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!(SortOrder::parse("desc"), SortOrder::Desc);
        assert_eq!(SortOrder::parse("DESC"), SortOrder::Desc);
        assert_eq!(SortOrder::parse("asc"), SortOrder::Asc);
        assert_eq!(SortOrder::parse("sideways"), SortOrder::Asc);
        assert_eq!(SortOrder::default(), SortOrder::Asc);
    }

    #[test]
    fn test_filter_replaces_same_slot() {
        let spec = QuerySpec::new()
            .filter(FilterDescriptor::numeric("price", NumericOp::Gte, "10"))
            .filter(FilterDescriptor::numeric("price", NumericOp::Lte, "50"))
            .filter(FilterDescriptor::numeric("price", NumericOp::Gte, "20"));

        assert_eq!(spec.filters.len(), 2);
        assert_eq!(spec.filters[0].value, "20");
        assert_eq!(spec.filters[1].op, FilterOp::Numeric(NumericOp::Lte));
    }

    #[test]
    fn test_page_zero_limit_defaults() {
        let spec = QuerySpec::new().page(0, 5);
        assert_eq!(spec.limit, DEFAULT_LIMIT);
        assert_eq!(spec.offset, 5);
    }

    #[test]
    fn test_blank_search_is_none() {
        assert_eq!(QuerySpec::new().search("   ").global_search, None);
        assert_eq!(
            QuerySpec::new().search("mug").global_search.as_deref(),
            Some("mug")
        );
    }
}
