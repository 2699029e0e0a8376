//! In-memory entity store for people and cars.
//!
//! Both collections are plain ordered vectors. Insertion order is the order
//! every full-collection read returns.
//!
//! ## Lookup vs delete
//!
//! Ids are caller-supplied and never checked for uniqueness, so a collection
//! can hold several records with the same id. Reads and updates act on the
//! FIRST match only; deletes remove EVERY match. Callers relying on unique ids
//! never observe the difference.
//!
//! ## Sharing
//!
//! The GraphQL layer runs on a multi-threaded runtime and reaches the store
//! through [`SharedStore`]. Each mutation holds one write guard for its whole
//! find-then-mutate step.

mod entity_store;
mod seed;

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{GarageError, Result};

pub use entity_store::EntityStore;
pub use seed::{seed_cars, seed_people};

pub type SharedStore = Arc<RwLock<EntityStore>>;

pub fn shared(store: EntityStore) -> SharedStore {
    Arc::new(RwLock::new(store))
}

pub fn read(store: &SharedStore) -> Result<RwLockReadGuard<'_, EntityStore>> {
    store.read().map_err(|_| GarageError::LockPoisoned)
}

pub fn write(store: &SharedStore) -> Result<RwLockWriteGuard<'_, EntityStore>> {
    store.write().map_err(|_| GarageError::LockPoisoned)
}
