//! Contract entity model
//!
//! Contract values arrive as display strings (`"$2,500,000"`), the way the
//! legal dashboard stores them; aggregation parses them with the currency
//! parser and flags the unparsable ones per record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::query::filter::SearchSpec;
use crate::query::value::{FieldValue, Queryable};

/// A commercial contract as shown on the CEO dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contract {
    /// Contract reference
    pub id: String,
    /// Short title
    pub title: String,
    /// Counterparty name
    pub party: String,
    /// Contract kind (e.g. "vendor", "client", "partnership")
    pub contract_type: String,
    /// Lifecycle status (e.g. "draft", "active", "expired")
    pub status: String,
    /// Contract value as a display string, e.g. `"$2,500,000"`
    pub value: String,
    /// First day in force
    pub start_date: NaiveDate,
    /// Last day in force, `None` for open-ended contracts
    pub end_date: Option<NaiveDate>,
}

impl Contract {
    /// Searchable fields for the contracts page's free-text box
    #[must_use]
    pub fn search_spec() -> SearchSpec {
        SearchSpec::new(["id", "title", "party"])
    }
}

impl Queryable for Contract {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(self.id.as_str().into()),
            "title" => Some(self.title.as_str().into()),
            "party" => Some(self.party.as_str().into()),
            "type" => Some(self.contract_type.as_str().into()),
            "status" => Some(self.status.as_str().into()),
            "value" => Some(self.value.as_str().into()),
            "start_date" => Some(self.start_date.to_string().into()),
            "end_date" => self.end_date.map(|d| d.to_string().into()),
            _ => None,
        }
    }
}
