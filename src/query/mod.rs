//! Collection query engine.
//!
//! Every dashboard page holds its canonical dataset in memory and re-derives
//! the visible subset and its summary tiles on each interaction. This module
//! is that shared machinery: a stable facet-and-substring filter, aggregate
//! statistics with per-record issue reporting, and first-seen-order distinct
//! value extraction for populating facet dropdowns.
//!
//! Everything here is a pure function of (records, state): records are never
//! mutated and no state is held between calls.

pub mod aggregate;
pub mod currency;
pub mod filter;
pub mod value;

use itertools::Itertools;

// Re-export commonly used types
pub use aggregate::{AggregateSpec, Aggregates, aggregate, percent_of};
pub use currency::parse_currency;
pub use filter::{FacetSelection, FilterState, SearchSpec, filter_records};
pub use value::{FieldValue, Queryable};

/// Unique values observed for a field, in first-seen order
///
/// Used to populate facet dropdown options from the dataset itself instead
/// of a hardcoded enum. Records without the field, or with a non-text value
/// in it, contribute nothing.
pub fn distinct_values<R: Queryable>(records: &[R], field: &str) -> Vec<String> {
    records
        .iter()
        .filter_map(|r| r.field(field).and_then(|v| v.into_text()))
        .unique()
        .collect()
}
