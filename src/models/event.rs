//! Event entity model
//!
//! Events carry the two percentage tiles that historically leaked NaN when a
//! denominator was zero; the helpers here route through the zero-safe
//! percentage computation instead.

use serde::{Deserialize, Serialize};

use crate::query::aggregate::percent_of;
use crate::query::filter::SearchSpec;
use crate::query::value::{FieldValue, Queryable};

/// A company event as shown on the CMO dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Event reference
    pub id: String,
    /// Event name
    pub name: String,
    /// Category (e.g. "conference", "webinar", "launch")
    pub category: String,
    /// Lifecycle status (e.g. "planned", "open", "done")
    pub status: String,
    /// How many attendees were planned for
    pub expected_attendees: u32,
    /// How many have registered so far
    pub registered_attendees: u32,
    /// Budget allocated to the event
    pub allocated_budget: f64,
    /// Budget spent so far
    pub spent_budget: f64,
}

impl Event {
    /// Searchable fields for the events page's free-text box
    #[must_use]
    pub fn search_spec() -> SearchSpec {
        SearchSpec::new(["id", "name", "category"])
    }

    /// Share of expected attendees that have registered, as a percentage
    ///
    /// An event expecting nobody reports 0% rather than dividing by zero.
    #[must_use]
    pub fn attendance_percent(&self) -> f64 {
        percent_of(
            f64::from(self.registered_attendees),
            f64::from(self.expected_attendees),
        )
    }

    /// Share of the allocated budget already spent, as a percentage
    #[must_use]
    pub fn budget_spent_percent(&self) -> f64 {
        percent_of(self.spent_budget, self.allocated_budget)
    }
}

impl Queryable for Event {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(self.id.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "category" => Some(self.category.as_str().into()),
            "status" => Some(self.status.as_str().into()),
            "expected_attendees" => Some(f64::from(self.expected_attendees).into()),
            "registered_attendees" => Some(f64::from(self.registered_attendees).into()),
            "allocated_budget" => Some(self.allocated_budget.into()),
            "spent_budget" => Some(self.spent_budget.into()),
            _ => None,
        }
    }
}
