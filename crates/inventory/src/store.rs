use std::collections::HashMap;

use stockroom_core::{DomainError, DomainResult, Entity};

use crate::location::{StorageLocation, StorageLocationId};

/// In-memory arena owning storage locations, keyed by identity.
///
/// Stocks hold [`StorageLocationId`] handles into a store. A handle that is
/// not registered here is rejected with `InvalidArgument` wherever it is used.
#[derive(Debug, Default)]
pub struct LocationStore {
    locations: HashMap<StorageLocationId, StorageLocation>,
}

impl LocationStore {
    pub fn new() -> Self {
        Self {
            locations: HashMap::new(),
        }
    }

    /// Register a location and return its handle.
    pub fn insert(&mut self, location: StorageLocation) -> DomainResult<StorageLocationId> {
        let id = *location.id();
        if self.locations.contains_key(&id) {
            return Err(DomainError::invalid_argument(format!(
                "storage location {id} is already registered"
            )));
        }
        self.locations.insert(id, location);
        Ok(id)
    }

    pub fn get(&self, id: StorageLocationId) -> DomainResult<&StorageLocation> {
        self.locations
            .get(&id)
            .ok_or_else(|| unknown_location(id))
    }

    pub fn get_mut(&mut self, id: StorageLocationId) -> DomainResult<&mut StorageLocation> {
        self.locations
            .get_mut(&id)
            .ok_or_else(|| unknown_location(id))
    }

    pub fn contains(&self, id: StorageLocationId) -> bool {
        self.locations.contains_key(&id)
    }

    /// Drop a location from the arena, handing it back to the caller.
    pub fn remove(&mut self, id: StorageLocationId) -> Option<StorageLocation> {
        self.locations.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Iterate over all registered locations (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &StorageLocation> {
        self.locations.values()
    }
}

fn unknown_location(id: StorageLocationId) -> DomainError {
    DomainError::invalid_argument(format!("unknown storage location {id}"))
}
