//! Goal entity model

use serde::{Deserialize, Serialize};

use crate::query::filter::SearchSpec;
use crate::query::value::{FieldValue, Queryable};

/// A staff goal as shown on the employee and manager dashboards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Goal reference
    pub id: String,
    /// Short title
    pub title: String,
    /// Identifier of the employee who owns the goal
    pub owner: String,
    /// Category (e.g. "performance", "learning", "wellbeing")
    pub category: String,
    /// Lifecycle status (e.g. "not-started", "in-progress", "done")
    pub status: String,
    /// Completion percentage, 0 to 100
    pub progress: f64,
}

impl Goal {
    /// Searchable fields for the goals page's free-text box
    #[must_use]
    pub fn search_spec() -> SearchSpec {
        SearchSpec::new(["id", "title", "owner"])
    }
}

impl Queryable for Goal {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(self.id.as_str().into()),
            "title" => Some(self.title.as_str().into()),
            "owner" => Some(self.owner.as_str().into()),
            "category" => Some(self.category.as_str().into()),
            "status" => Some(self.status.as_str().into()),
            "progress" => Some(self.progress.into()),
            _ => None,
        }
    }
}
