//! Domain models for the staff portal
//!
//! These are the record types the dashboard pages hold in memory: one type
//! per dataset, each exposing its searchable, categorical, and numeric
//! fields to the query engine through [`Queryable`](crate::query::Queryable).

// Re-export entity models
pub mod contract;
pub mod employee;
pub mod event;
pub mod goal;
pub mod payroll;

// Re-export commonly used types
pub use contract::Contract;
pub use employee::Employee;
pub use event::Event;
pub use goal::Goal;
pub use payroll::PayrollRecord;
