//! Stable filtering of record collections.
//!
//! Filtering combines a free-text query (case-insensitive substring match,
//! OR across the configured searchable fields) with exact-match categorical
//! facets (AND across distinct facets). Input order is preserved; the empty
//! query with every facet on its "all" wildcard is the identity filter.

use rustc_hash::FxHashMap;

use super::value::Queryable;

/// Selection state of a single categorical facet
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FacetSelection {
    /// The "all" wildcard: no constraint on this facet
    #[default]
    All,
    /// Exact-match constraint on this facet
    Value(String),
}

/// Ephemeral filter state, owned by the presentation layer
///
/// Reconstructed per interaction; the engine is a pure function of
/// (records, state) and keeps nothing between calls.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    /// Free-text query, matched case-insensitively as a substring
    pub query: String,
    /// Facet selections keyed by facet field name
    pub facets: FxHashMap<String, FacetSelection>,
}

impl FilterState {
    /// Create an identity filter state (empty query, no facet constraints)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text query
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Constrain a facet to an exact value
    #[must_use]
    pub fn with_facet(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.facets
            .insert(name.into(), FacetSelection::Value(value.into()));
        self
    }

    /// Reset a facet to the "all" wildcard
    ///
    /// Equivalent to the facet being absent; kept explicit so dropdown state
    /// can round-trip through the filter state unchanged.
    #[must_use]
    pub fn with_all(mut self, name: impl Into<String>) -> Self {
        self.facets.insert(name.into(), FacetSelection::All);
        self
    }

    /// Whether this state constrains nothing
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.query.is_empty()
            && self
                .facets
                .values()
                .all(|s| matches!(s, FacetSelection::All))
    }
}

/// Names the free-text searchable fields of a record type
#[derive(Debug, Clone, Default)]
pub struct SearchSpec {
    /// Fields the free-text query is matched against
    pub searchable: Vec<String>,
}

impl SearchSpec {
    /// Create a spec from the given searchable field names
    #[must_use]
    pub fn new<I, T>(fields: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            searchable: fields.into_iter().map(Into::into).collect(),
        }
    }
}

/// Whether a single record satisfies the filter state
///
/// Text match: at least one searchable field contains the lower-cased query
/// as a substring. Facet match: every facet with a `Value` selection equals
/// the record's field exactly. Both must hold.
pub fn matches<R: Queryable>(record: &R, state: &FilterState, spec: &SearchSpec) -> bool {
    if !state.query.is_empty() {
        let needle = state.query.to_lowercase();
        let hit = spec.searchable.iter().any(|field| {
            record
                .field(field)
                .and_then(|v| v.into_text())
                .is_some_and(|text| text.to_lowercase().contains(&needle))
        });
        if !hit {
            return false;
        }
    }

    for (name, selection) in &state.facets {
        if let FacetSelection::Value(expected) = selection {
            let matched = record
                .field(name)
                .and_then(|v| v.into_text())
                .is_some_and(|actual| actual == *expected);
            if !matched {
                return false;
            }
        }
    }

    true
}

/// Filter a collection, preserving input order
///
/// The identity state returns all records unchanged, in the same order.
pub fn filter_records<R>(records: &[R], state: &FilterState, spec: &SearchSpec) -> Vec<R>
where
    R: Queryable + Clone,
{
    records
        .iter()
        .filter(|r| matches(*r, state, spec))
        .cloned()
        .collect()
}
