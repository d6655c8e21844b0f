use roster_core::{IdRegistry, MemorySlotStore, RegistryConfig, RosterError, ValidationError};

use crate::utils::{init_logging, memory_registry};

/// Registering the same normalized identifier twice succeeds once
#[test]
fn test_idempotent_rejection() {
    init_logging();
    let registry = memory_registry();

    assert!(registry.register("EMP-001"));
    assert!(!registry.register("EMP-001"));

    let ids = registry.registered_ids();
    assert_eq!(ids.len(), 1);
    assert!(ids.contains("EMP-001"));
}

/// Lower- and mixed-case candidates collide with their uppercase form
#[test]
fn test_case_insensitive_uniqueness() {
    let registry = memory_registry();

    assert!(registry.register("emp-001"));
    assert!(registry.is_taken("EMP-001"));
    assert!(registry.is_taken("  Emp-001 "));
    assert!(!registry.register("EMP-001"));

    // The committed form is the normalized one
    assert!(registry.registered_ids().contains("EMP-001"));
}

/// Format errors take precedence over uniqueness errors
#[test]
fn test_validation_precedence() {
    let registry = memory_registry();
    assert!(registry.register("EMP-001"));

    assert_eq!(registry.validate("AB"), Err(ValidationError::TooShort { len: 2 }));
    assert_eq!(
        registry.validate("emp-001"),
        Err(ValidationError::AlreadyTaken {
            id: "EMP-001".to_string()
        })
    );
    assert_eq!(registry.validate("EMP-002"), Ok("EMP-002".to_string()));
}

/// Generated candidates registered immediately never collide
#[test]
fn test_generation_collision_freedom() {
    let registry = memory_registry();

    for _ in 0..25 {
        let id = registry.generate_unique().expect("keyspace far from full");
        assert!(registry.validate(&id).is_ok(), "generated id should validate: {id}");
        assert!(registry.register(&id));
    }

    assert_eq!(registry.registered_ids().len(), 25);
}

/// An exhausted attempt budget surfaces as an explicit error, not a hang
#[test]
fn test_keyspace_exhaustion() {
    let registry = IdRegistry::with_config(
        MemorySlotStore::new(),
        RegistryConfig {
            prefix: "EMP".to_string(),
            max_generate_attempts: 0,
        },
    );

    match registry.generate_unique() {
        Err(RosterError::KeyspaceExhausted { attempts }) => assert_eq!(attempts, 0),
        other => panic!("expected keyspace exhaustion, got {other:?}"),
    }
}

/// Removal is explicit and idempotent
#[test]
fn test_remove() {
    let registry = memory_registry();

    assert!(registry.register("EMP-001"));
    assert!(registry.remove("emp-001"));
    assert!(!registry.remove("EMP-001"));
    assert!(!registry.is_taken("EMP-001"));

    // The identifier is free for reuse after removal
    assert!(registry.register("EMP-001"));
}

/// clear wipes both memory and the backing slot
#[test]
fn test_clear() {
    let registry = memory_registry();
    registry.register("EMP-001");
    registry.register("EMP-002");

    registry.clear();
    assert!(registry.registered_ids().is_empty());
    assert!(registry.register("EMP-001"));
}

/// A store whose reads fail degrades to an empty registry view, and whose
/// failed writes leave the registry unmutated
#[test]
fn test_storage_failure_degrades() {
    init_logging();
    let registry = IdRegistry::new(BrokenStore);

    assert!(registry.registered_ids().is_empty());
    assert!(!registry.is_taken("EMP-001"));

    // The write fails, so the commit is rolled back
    assert!(!registry.register("EMP-001"));
    assert!(!registry.is_taken("EMP-001"));
}

#[derive(Debug)]
struct BrokenStore;

impl roster_core::SlotStore for BrokenStore {
    fn read(&self) -> roster_core::Result<Option<String>> {
        Err(roster_core::RosterError::store_error("read refused"))
    }

    fn write(&self, _payload: &str) -> roster_core::Result<()> {
        Err(roster_core::RosterError::store_error("write refused"))
    }

    fn clear(&self) -> roster_core::Result<()> {
        Err(roster_core::RosterError::store_error("clear refused"))
    }
}
