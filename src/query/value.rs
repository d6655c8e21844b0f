//! Attribute-bag access to queryable records.

/// A single field value exposed by a record
///
/// Text fields serve free-text search and categorical facets; numeric fields
/// serve aggregation. Currency amounts held as display strings (for example
/// `"$2,500,000"`) are exposed as `Text` and parsed at aggregation time.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// String value
    Text(String),
    /// Numeric value
    Number(f64),
    /// Boolean value
    Bool(bool),
}

impl FieldValue {
    /// View as text, `None` for non-text variants
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Consume into text, `None` for non-text variants
    #[must_use]
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// View as a number, `None` for non-numeric variants
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// A record the query engine can inspect
///
/// Implementations expose named fields as [`FieldValue`]s. Records are
/// immutable snapshots for the duration of a query; the engine never
/// mutates them.
pub trait Queryable {
    /// Look up a named field
    ///
    /// # Returns
    /// The field's value, or `None` when the record has no such field
    fn field(&self, name: &str) -> Option<FieldValue>;
}
