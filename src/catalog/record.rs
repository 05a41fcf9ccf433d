//! Catalog records and typed field access
//!
//! A record is an open field-name-to-value mapping. Field presence is
//! optional everywhere; an absent field is never an error. Only one nested
//! path (`rating.rate`) is addressable beyond the top level.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Dotted name of the one addressable nested field
pub const RATING_RATE: &str = "rating.rate";

/// One catalog entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Creates a record from a JSON object map
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Converts a JSON value into a record; only objects qualify
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Direct top-level lookup
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Resolves a field path, including the nested rating path
    pub fn resolve(&self, path: &FieldPath) -> Option<&Value> {
        match path {
            FieldPath::RatingRate => self.0.get("rating").and_then(|r| r.get("rate")),
            FieldPath::TopLevel(name) => self.0.get(name.as_str()),
        }
    }

    /// Top-level field values
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.0.values()
    }

    /// Number of top-level fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the record has no fields at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn id(&self) -> Option<&Value> {
        self.get("id")
    }

    pub fn title(&self) -> Option<&str> {
        self.get("title").and_then(Value::as_str)
    }

    pub fn price(&self) -> Option<f64> {
        number_of(self.get("price"))
    }

    pub fn rating_rate(&self) -> Option<f64> {
        number_of(self.resolve(&FieldPath::RatingRate))
    }

    /// Borrow the underlying map
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Address of a field inside a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldPath {
    /// `rating.rate`
    RatingRate,
    /// Any top-level field, looked up by exact name
    TopLevel(String),
}

impl FieldPath {
    /// Maps a client-supplied field name onto a path.
    ///
    /// Dotted names other than `rating.rate` are looked up literally as
    /// top-level keys, which in practice means they resolve to absent.
    pub fn parse(name: &str) -> Self {
        if name == RATING_RATE {
            FieldPath::RatingRate
        } else {
            FieldPath::TopLevel(name.to_string())
        }
    }
}

/// Parses a locale-free finite floating-point number.
///
/// Surrounding whitespace is ignored. Empty strings, `NaN` and infinities
/// never parse.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Numeric view of a field value, if it has one.
///
/// Numbers map to themselves and strings go through [`parse_number`].
/// Booleans, nulls, objects, arrays and absent fields have no numeric view.
pub fn number_of(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => parse_number(s),
        _ => None,
    }
}

/// Textual view of a field value. Absent and null are the empty string.
pub fn text_of(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Normalized form used by every text comparison: trimmed and lowercased
pub fn fold(raw: &str) -> String {
    raw.trim().to_lowercase()
}
