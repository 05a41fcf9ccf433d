//! Query Planner subsystem for catalogd
//!
//! Turns the raw query-string fields of a request into a structured
//! [`QuerySpec`]: an optional global search term, an ordered list of column
//! filter descriptors, sort intent and a pagination window.
//!
//! # Suffix table
//!
//! | suffix        | operator                                   |
//! |---------------|--------------------------------------------|
//! | `like`        | text `contains`                            |
//! | `not_like`    | text `not_contains`                        |
//! | `starts_with` | text `begins_with`                         |
//! | `ends_with`   | text `ends_with`                           |
//! | `eq`          | numeric `eq` if the value is a number, else text `equals` |
//! | `neq`         | numeric `neq` if the value is a number, else text `not_equals` |
//! | `gt` `lt` `gte` `lte` | numeric, dropped when the value is not a number |
//! | `blank`       | text `is_blank`                            |
//! | `not_blank`   | text `is_not_blank`                        |
//!
//! `between` is never produced from a query string. A range arrives as two
//! independent `_gte` / `_lte` filters; `between` exists for in-process
//! callers that build descriptors directly.

mod ast;
mod parser;

pub use ast::{
    FilterDescriptor, FilterOp, NumericOp, QuerySpec, SortOrder, TextOp, DEFAULT_LIMIT,
};
pub use parser::{
    parse_filter_key, parse_limit, parse_skip, PARAM_LIMIT, PARAM_ORDER, PARAM_SEARCH,
    PARAM_SKIP, PARAM_SORT_BY,
};
