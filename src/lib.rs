//! Core library for a role-based staff portal: a registry of globally unique
//! employee identifiers and a generic query engine for filtering and
//! aggregating in-memory record collections.

pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod registry;

// Re-export the most common types for easier use
// Core types
pub use config::RegistryConfig;
pub use error::{CurrencyError, Result, RosterError, ValidationError};

// Identifier registry
pub use registry::IdRegistry;
pub use registry::store::{FileSlotStore, MemorySlotStore, SlotStore};
pub use registry::validate::{normalize_id, validate_format};

// Query engine
pub use query::aggregate::{
    AggregateIssue, AggregateSpec, Aggregates, NumericFieldSpec, NumericKind, aggregate,
    percent_of,
};
pub use query::currency::parse_currency;
pub use query::filter::{FacetSelection, FilterState, SearchSpec, filter_records, matches};
pub use query::value::{FieldValue, Queryable};
pub use query::distinct_values;
