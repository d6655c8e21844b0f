//! Employee entity model
//!
//! The HR and manager dashboards hold a roster of these records and drive
//! their search box, department/status dropdowns, and satisfaction tiles
//! through the query engine.

use serde::{Deserialize, Serialize};

use crate::query::filter::SearchSpec;
use crate::query::value::{FieldValue, Queryable};

/// A member of staff as shown on the roster pages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    /// Committed employee identifier, normalized
    pub id: String,
    /// Full name
    pub name: String,
    /// Job title
    pub role: String,
    /// Department the employee belongs to
    pub department: String,
    /// Employment status (e.g. "active", "on-leave", "terminated")
    pub status: String,
    /// Satisfaction score; 0 means not yet rated
    pub satisfaction: f64,
    /// Annual salary
    pub salary: f64,
}

impl Employee {
    /// Searchable fields for the roster pages' free-text box
    #[must_use]
    pub fn search_spec() -> SearchSpec {
        SearchSpec::new(["id", "name", "role", "department"])
    }
}

impl Queryable for Employee {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(self.id.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "role" => Some(self.role.as_str().into()),
            "department" => Some(self.department.as_str().into()),
            "status" => Some(self.status.as_str().into()),
            "satisfaction" => Some(self.satisfaction.into()),
            "salary" => Some(self.salary.into()),
            _ => None,
        }
    }
}
