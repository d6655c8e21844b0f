use roster_core::models::{Contract, Employee, Goal};
use roster_core::{FilterState, SearchSpec, distinct_values, filter_records};

use crate::utils::{sample_contracts, sample_employees};

fn names(employees: &[Employee]) -> Vec<&str> {
    employees.iter().map(|e| e.name.as_str()).collect()
}

/// The empty state is the identity filter
#[test]
fn test_identity_filter() {
    let employees = sample_employees();
    let state = FilterState::new().with_all("department").with_all("status");
    assert!(state.is_identity());

    let filtered = filter_records(&employees, &state, &Employee::search_spec());
    assert_eq!(filtered.len(), employees.len());
    assert_eq!(names(&filtered), names(&employees));
}

/// Case-insensitive substring match, preserving input order
#[test]
fn test_substring_semantics() {
    let employees: Vec<Employee> = ["Alpha", "Beta", "Alphabet"]
        .iter()
        .enumerate()
        .map(|(i, name)| Employee {
            id: format!("EMP-{:03}", i + 1),
            name: (*name).to_string(),
            role: "Engineer".to_string(),
            department: "Engineering".to_string(),
            status: "active".to_string(),
            satisfaction: 4.0,
            salary: 90_000.0,
        })
        .collect();

    let state = FilterState::new().with_query("alpha");
    let filtered = filter_records(&employees, &state, &Employee::search_spec());
    assert_eq!(names(&filtered), vec!["Alpha", "Alphabet"]);
}

/// The text query matches with OR semantics across searchable fields
#[test]
fn test_query_spans_fields() {
    let employees = sample_employees();

    // "engineer" appears in roles, "marketing" only as a department
    let by_role = filter_records(
        &employees,
        &FilterState::new().with_query("engineer"),
        &Employee::search_spec(),
    );
    assert_eq!(names(&by_role), vec!["Jane Calloway", "Priya Nair"]);

    let by_department = filter_records(
        &employees,
        &FilterState::new().with_query("marketing"),
        &Employee::search_spec(),
    );
    assert_eq!(names(&by_department), vec!["Marcus Webb"]);
}

/// Distinct facets combine with AND semantics
#[test]
fn test_facet_and_semantics() {
    let contracts = sample_contracts();

    let state = FilterState::new()
        .with_facet("type", "vendor")
        .with_facet("status", "open");
    let filtered = filter_records(&contracts, &state, &Contract::search_spec());

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "CTR-001");
}

/// Text query and facets must all hold together
#[test]
fn test_query_and_facets_combined() {
    let employees = sample_employees();

    let state = FilterState::new()
        .with_query("engineer")
        .with_facet("status", "active");
    let filtered = filter_records(&employees, &state, &Employee::search_spec());

    assert_eq!(names(&filtered), vec!["Jane Calloway"]);
}

/// A facet value nothing matches yields an empty view, not an error
#[test]
fn test_unmatched_facet() {
    let employees = sample_employees();
    let state = FilterState::new().with_facet("department", "Legal");
    let filtered = filter_records(&employees, &state, &Employee::search_spec());
    assert!(filtered.is_empty());
}

/// A facet on a field records do not have excludes them
#[test]
fn test_missing_facet_field_excludes() {
    let employees = sample_employees();
    let state = FilterState::new().with_facet("region", "EMEA");
    let filtered = filter_records(&employees, &state, &Employee::search_spec());
    assert!(filtered.is_empty());
}

/// Searchable fields that are absent or non-text never match the query
#[test]
fn test_query_ignores_missing_fields() {
    let employees = sample_employees();
    let spec = SearchSpec::new(["nickname", "name"]);
    let filtered = filter_records(&employees, &FilterState::new().with_query("priya"), &spec);
    assert_eq!(names(&filtered), vec!["Priya Nair"]);
}

/// The manager's goal list filters by owner facet and search term together
#[test]
fn test_goal_owner_facet() {
    let goal = |id: &str, title: &str, owner: &str, status: &str| Goal {
        id: id.to_string(),
        title: title.to_string(),
        owner: owner.to_string(),
        category: "performance".to_string(),
        status: status.to_string(),
        progress: 40.0,
    };
    let goals = vec![
        goal("GL-001", "Ship the billing revamp", "EMP-001", "in-progress"),
        goal("GL-002", "Mentor two juniors", "EMP-001", "not-started"),
        goal("GL-003", "Ship the mobile beta", "EMP-003", "in-progress"),
    ];

    let state = FilterState::new()
        .with_query("ship")
        .with_facet("owner", "EMP-001");
    let filtered = filter_records(&goals, &state, &Goal::search_spec());

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "GL-001");
}

/// Facet dropdowns are populated in first-seen order
#[test]
fn test_distinct_values_first_seen_order() {
    let employees = sample_employees();
    assert_eq!(
        distinct_values(&employees, "department"),
        vec!["Engineering", "Marketing", "HR"]
    );
    assert_eq!(distinct_values(&employees, "status"), vec!["active", "on-leave"]);
    assert!(distinct_values(&employees, "region").is_empty());
}
