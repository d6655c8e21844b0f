//! Shared builders for integration tests.

use chrono::NaiveDate;
use roster_core::models::{Contract, Employee, Event};
use roster_core::{IdRegistry, MemorySlotStore};

/// Initialize test logging; safe to call from every test
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A registry over a fresh in-memory slot
pub fn memory_registry() -> IdRegistry<MemorySlotStore> {
    IdRegistry::new(MemorySlotStore::new())
}

fn employee(
    id: &str,
    name: &str,
    role: &str,
    department: &str,
    status: &str,
    satisfaction: f64,
    salary: f64,
) -> Employee {
    Employee {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        department: department.to_string(),
        status: status.to_string(),
        satisfaction,
        salary,
    }
}

/// A small roster spanning three departments, with one not-yet-rated
/// satisfaction score
pub fn sample_employees() -> Vec<Employee> {
    vec![
        employee(
            "EMP-001",
            "Jane Calloway",
            "Engineer",
            "Engineering",
            "active",
            4.0,
            95_000.0,
        ),
        employee(
            "EMP-002",
            "Marcus Webb",
            "Designer",
            "Marketing",
            "active",
            0.0,
            72_000.0,
        ),
        employee(
            "EMP-003",
            "Priya Nair",
            "Engineer",
            "Engineering",
            "on-leave",
            5.0,
            101_000.0,
        ),
        employee(
            "EMP-004",
            "Tom Okafor",
            "Recruiter",
            "HR",
            "active",
            3.0,
            64_000.0,
        ),
    ]
}

fn contract(id: &str, title: &str, kind: &str, status: &str, value: &str) -> Contract {
    Contract {
        id: id.to_string(),
        title: title.to_string(),
        party: "Acme Corp".to_string(),
        contract_type: kind.to_string(),
        status: status.to_string(),
        value: value.to_string(),
        start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        end_date: None,
    }
}

/// Contracts covering the {type, status} facet grid, including one with an
/// unparsable value
pub fn sample_contracts() -> Vec<Contract> {
    vec![
        contract("CTR-001", "Cloud hosting", "vendor", "open", "$2,500,000"),
        contract("CTR-002", "Office lease", "vendor", "closed", "$120,000"),
        contract("CTR-003", "Retainer", "client", "open", "$48,500.50"),
        contract("CTR-004", "Pilot program", "client", "draft", "TBD"),
    ]
}

/// Events including one with zero expected attendees and zero allocation
pub fn sample_events() -> Vec<Event> {
    vec![
        Event {
            id: "EVT-001".to_string(),
            name: "Product launch".to_string(),
            category: "launch".to_string(),
            status: "open".to_string(),
            expected_attendees: 200,
            registered_attendees: 150,
            allocated_budget: 10_000.0,
            spent_budget: 2_500.0,
        },
        Event {
            id: "EVT-002".to_string(),
            name: "Internal all-hands".to_string(),
            category: "internal".to_string(),
            status: "planned".to_string(),
            expected_attendees: 0,
            registered_attendees: 0,
            allocated_budget: 0.0,
            spent_budget: 0.0,
        },
    ]
}
