//! Globally unique employee identifier registry.
//!
//! The registry is the single source of truth for "is this identifier
//! already in use". It is an explicit, constructible object holding its own
//! backing store, so production code can inject a durable
//! [`store::FileSlotStore`] while tests run against a
//! [`store::MemorySlotStore`].
//!
//! Committed identifiers are loaded lazily on first access and held behind a
//! mutex. All check-then-act sequences (uniqueness check followed by commit)
//! run under that lock, so two callers in the same process cannot both pass
//! the check before either commits. Cross-process atomicity is up to the
//! [`SlotStore`] implementation.
//!
//! Storage failures degrade rather than propagate: a failed read yields an
//! empty registry view and a failed write rolls the mutation back, both with
//! a logged warning. Uniqueness checking is best-effort while storage is
//! down.

pub mod store;
pub mod validate;

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use rand::Rng;
use rustc_hash::FxHashSet;

use crate::config::RegistryConfig;
use crate::error::{Result, RosterError, ValidationError};
use store::SlotStore;
use validate::{normalize_id, validate_format};

/// Registry of committed employee identifiers
#[derive(Debug)]
pub struct IdRegistry<S: SlotStore> {
    store: S,
    config: RegistryConfig,
    /// `None` until the slot has been read once
    ids: Mutex<Option<FxHashSet<String>>>,
}

impl<S: SlotStore> IdRegistry<S> {
    /// Create a registry over the given backing store with default configuration
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_config(store, RegistryConfig::default())
    }

    /// Create a registry with explicit configuration
    ///
    /// The configured prefix is normalized so generated candidates always
    /// pass format validation.
    #[must_use]
    pub fn with_config(store: S, mut config: RegistryConfig) -> Self {
        config.prefix = normalize_id(&config.prefix);
        Self {
            store,
            config,
            ids: Mutex::new(None),
        }
    }

    /// All currently committed identifiers, normalized
    ///
    /// Lazily initializes from the backing store on first call. A failed
    /// read degrades to an empty set.
    #[must_use]
    pub fn registered_ids(&self) -> FxHashSet<String> {
        let mut guard = self.locked();
        guard.get_or_insert_with(|| self.load()).clone()
    }

    /// Whether the normalized form of `candidate` is already committed
    #[must_use]
    pub fn is_taken(&self, candidate: &str) -> bool {
        let id = normalize_id(candidate);
        let mut guard = self.locked();
        guard.get_or_insert_with(|| self.load()).contains(&id)
    }

    /// Validate format and uniqueness of a candidate identifier
    ///
    /// Format errors take precedence over uniqueness errors.
    ///
    /// # Returns
    /// The normalized identifier, ready to commit
    ///
    /// # Errors
    /// Returns the first violated rule as a [`ValidationError`]
    pub fn validate(&self, candidate: &str) -> std::result::Result<String, ValidationError> {
        let id = validate_format(candidate)?;
        if self.is_taken(&id) {
            return Err(ValidationError::AlreadyTaken { id });
        }
        Ok(id)
    }

    /// Commit a candidate identifier
    ///
    /// Returns `false` without mutation when the normalized identifier is
    /// already committed, or when persisting the updated set fails (the
    /// in-memory insert is rolled back so memory and store stay in step).
    /// Callers are expected to have run [`validate`](Self::validate) first;
    /// `register` itself only enforces uniqueness.
    pub fn register(&self, candidate: &str) -> bool {
        let id = normalize_id(candidate);
        let mut guard = self.locked();
        let ids = guard.get_or_insert_with(|| self.load());

        if ids.contains(&id) {
            return false;
        }

        ids.insert(id.clone());
        if let Err(e) = persist(&self.store, ids) {
            log::warn!("Failed to persist identifier '{id}', rolling back: {e}");
            ids.remove(&id);
            return false;
        }

        log::debug!("Committed employee identifier '{id}'");
        true
    }

    /// Administrative unregistration
    ///
    /// Returns whether the identifier was present and removed. On a failed
    /// persist the removal is rolled back and `false` is returned.
    pub fn remove(&self, candidate: &str) -> bool {
        let id = normalize_id(candidate);
        let mut guard = self.locked();
        let ids = guard.get_or_insert_with(|| self.load());

        if !ids.remove(&id) {
            return false;
        }

        if let Err(e) = persist(&self.store, ids) {
            log::warn!("Failed to persist removal of '{id}', rolling back: {e}");
            ids.insert(id);
            return false;
        }

        true
    }

    /// Wipe the registry and its backing slot (test/administrative use only)
    pub fn clear(&self) {
        let mut guard = self.locked();
        *guard = Some(FxHashSet::default());
        if let Err(e) = self.store.clear() {
            log::warn!("Failed to clear registry slot: {e}");
        }
    }

    /// Generate a collision-free candidate identifier
    ///
    /// Candidates have the form `PREFIX-<time digits>-<3-digit random
    /// suffix>` and are checked against the registry; the first free one is
    /// returned. The result is not committed, so callers register it as part
    /// of completing the profile.
    ///
    /// # Errors
    /// Returns [`RosterError::KeyspaceExhausted`] when no free candidate is
    /// found within the configured attempt bound. That signals a stuck or
    /// corrupted backing store, not a normal-path condition.
    pub fn generate_unique(&self) -> Result<String> {
        let mut rng = rand::rng();
        for _ in 0..self.config.max_generate_attempts {
            let millis = Utc::now().timestamp_millis();
            let suffix: u32 = rng.random_range(0..1000);
            let candidate = format!("{}-{:06}-{suffix:03}", self.config.prefix, millis % 1_000_000);
            if !self.is_taken(&candidate) {
                return Ok(candidate);
            }
        }
        Err(RosterError::KeyspaceExhausted {
            attempts: self.config.max_generate_attempts,
        })
    }

    fn locked(&self) -> MutexGuard<'_, Option<FxHashSet<String>>> {
        self.ids.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Read the slot, degrading to an empty set on any failure
    fn load(&self) -> FxHashSet<String> {
        match self.store.read() {
            Ok(Some(payload)) => match serde_json::from_str::<Vec<String>>(&payload) {
                Ok(ids) => ids.iter().map(|id| normalize_id(id)).collect(),
                Err(e) => {
                    log::warn!("Registry slot holds malformed JSON, treating as empty: {e}");
                    FxHashSet::default()
                }
            },
            Ok(None) => FxHashSet::default(),
            Err(e) => {
                log::warn!("Failed to read registry slot, uniqueness checks degraded: {e}");
                FxHashSet::default()
            }
        }
    }
}

/// Rewrite the slot with the full identifier set, sorted for a stable payload
fn persist<S: SlotStore>(store: &S, ids: &FxHashSet<String>) -> Result<()> {
    let mut sorted: Vec<&String> = ids.iter().collect();
    sorted.sort();
    let payload = serde_json::to_string(&sorted)
        .map_err(|e| RosterError::store_error(format!("Failed to encode registry payload: {e}")))?;
    store.write(&payload)
}
