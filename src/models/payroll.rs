//! Payroll entity model

use serde::{Deserialize, Serialize};

use crate::query::filter::SearchSpec;
use crate::query::value::{FieldValue, Queryable};

/// One payroll line for one employee and pay period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// Identifier of the employee the line belongs to
    pub employee_id: String,
    /// Employee name, denormalized for display
    pub employee_name: String,
    /// Department charged
    pub department: String,
    /// Pay period label (e.g. "2026-08")
    pub period: String,
    /// Processing status (e.g. "pending", "processed", "failed")
    pub status: String,
    /// Gross amount for the period
    pub gross: f64,
    /// Net amount after deductions
    pub net: f64,
}

impl PayrollRecord {
    /// Searchable fields for the payroll page's free-text box
    #[must_use]
    pub fn search_spec() -> SearchSpec {
        SearchSpec::new(["employee_id", "employee_name", "department", "period"])
    }
}

impl Queryable for PayrollRecord {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "employee_id" => Some(self.employee_id.as_str().into()),
            "employee_name" => Some(self.employee_name.as_str().into()),
            "department" => Some(self.department.as_str().into()),
            "period" => Some(self.period.as_str().into()),
            "status" => Some(self.status.as_str().into()),
            "gross" => Some(self.gross.into()),
            "net" => Some(self.net.into()),
            _ => None,
        }
    }
}
