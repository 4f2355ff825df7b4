use std::collections::HashSet;

use tracing::{debug, warn};

use stockroom_core::{DomainError, DomainResult};

use crate::article::Article;
use crate::config::StockConfig;
use crate::location::{total_width, StorageLocation, StorageLocationId};
use crate::store::LocationStore;

/// A bounded collection of storage locations under a temperature constraint.
///
/// The stock stores location handles, never the locations themselves; the
/// contents live in a [`LocationStore`] that callers pass to any operation
/// that reads or moves articles. Membership is by identity: a handle appears
/// at most once, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Stock {
    config: StockConfig,
    temperature: f64,
    locations: Vec<StorageLocationId>,
}

impl Default for Stock {
    fn default() -> Self {
        Self::new()
    }
}

impl Stock {
    /// Reported by [`Self::temperature`] until a temperature has been set.
    pub const UNSET_TEMPERATURE: f64 = f64::MIN;

    /// Create an empty stock with the default limits.
    pub fn new() -> Self {
        Self {
            config: StockConfig::default(),
            temperature: Self::UNSET_TEMPERATURE,
            locations: Vec::new(),
        }
    }

    /// Create an empty stock with custom limits.
    pub fn with_config(config: StockConfig) -> DomainResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            temperature: Self::UNSET_TEMPERATURE,
            locations: Vec::new(),
        })
    }

    pub fn config(&self) -> &StockConfig {
        &self.config
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn set_temperature(&mut self, temperature: f64) -> DomainResult<()> {
        if !self.config.accepts_temperature(temperature) {
            return Err(DomainError::invalid_temperature(format!(
                "{temperature} outside {}..={}",
                self.config.min_temperature, self.config.max_temperature
            )));
        }
        self.temperature = temperature;
        Ok(())
    }

    /// Member locations in insertion order.
    pub fn storage_locations(&self) -> &[StorageLocationId] {
        &self.locations
    }

    pub fn contains(&self, id: StorageLocationId) -> bool {
        self.locations.contains(&id)
    }

    /// Members whose name matches `name` case-insensitively, in insertion order.
    ///
    /// Handles no longer registered in `store` are skipped.
    pub fn storage_locations_by_name(
        &self,
        store: &LocationStore,
        name: &str,
    ) -> Vec<StorageLocationId> {
        self.locations
            .iter()
            .copied()
            .filter(|id| store.get(*id).is_ok_and(|loc| loc.has_name(name)))
            .collect()
    }

    /// Add one location. Adding a current member again is a no-op.
    pub fn add_storage_location(
        &mut self,
        store: &LocationStore,
        id: StorageLocationId,
    ) -> DomainResult<()> {
        store.get(id)?;

        if self.contains(id) {
            return Ok(());
        }
        self.ensure_room_for(1)?;

        self.locations.push(id);
        debug!(location = %id, members = self.locations.len(), "storage location added");
        Ok(())
    }

    /// Add several locations, all or none.
    ///
    /// Repeated handles and current members are dropped first; the capacity
    /// check applies to what remains. First-seen order is preserved.
    pub fn add_storage_locations(
        &mut self,
        store: &LocationStore,
        ids: impl IntoIterator<Item = StorageLocationId>,
    ) -> DomainResult<()> {
        let mut seen = HashSet::new();
        let mut to_insert = Vec::new();

        for id in ids {
            store.get(id)?;
            if seen.insert(id) && !self.contains(id) {
                to_insert.push(id);
            }
        }
        self.ensure_room_for(to_insert.len())?;

        debug!(added = to_insert.len(), "storage locations added");
        self.locations.extend(to_insert);
        Ok(())
    }

    /// Remove every member whose name matches case-insensitively.
    ///
    /// Removed locations stay in `store`; their handles are returned in order.
    pub fn remove_storage_locations_by_name(
        &mut self,
        store: &LocationStore,
        name: &str,
    ) -> Vec<StorageLocationId> {
        let removed = self.storage_locations_by_name(store, name);
        self.locations.retain(|id| !removed.contains(id));

        debug!(name, removed = removed.len(), "storage locations removed by name");
        removed
    }

    /// Remove all members, returning their handles in order.
    pub fn clear_storage_locations(&mut self) -> Vec<StorageLocationId> {
        let removed = std::mem::take(&mut self.locations);
        debug!(removed = removed.len(), "storage locations cleared");
        removed
    }

    /// Move every article from `from` into `to`.
    ///
    /// Returns `Ok(false)` and changes nothing if the combined contents would
    /// exceed a location's count or width budget. Neither location has to be
    /// a member of this stock.
    pub fn move_all_articles(
        &self,
        store: &mut LocationStore,
        to: StorageLocationId,
        from: StorageLocationId,
    ) -> DomainResult<bool> {
        self.move_matching(store, to, from, None)
    }

    /// Move the articles of `from` matching `art_nr` into `to`.
    ///
    /// The budget baseline is the full contents of `to`.
    pub fn move_articles(
        &self,
        store: &mut LocationStore,
        to: StorageLocationId,
        from: StorageLocationId,
        art_nr: &str,
    ) -> DomainResult<bool> {
        self.move_matching(store, to, from, Some(art_nr))
    }

    fn move_matching(
        &self,
        store: &mut LocationStore,
        to: StorageLocationId,
        from: StorageLocationId,
        art_nr: Option<&str>,
    ) -> DomainResult<bool> {
        if to == from {
            return Err(DomainError::invalid_argument(format!(
                "cannot move storage location {to} into itself"
            )));
        }

        let fits = {
            let target = store.get(to)?;
            let source = store.get(from)?;
            let incoming: Vec<&Article> = match art_nr {
                None => source.articles().iter().collect(),
                Some(art_nr) => source.articles_by_nr(art_nr),
            };

            let combined_count = target.len() + incoming.len();
            let combined_width = total_width(target.articles().iter().chain(incoming.iter().copied()));

            combined_count <= StorageLocation::MAX_ARTICLES
                && combined_width <= StorageLocation::MAX_WIDTH
                && target.can_accept(incoming.len(), total_width(incoming.iter().copied()))
        };

        if !fits {
            warn!(to = %to, from = %from, art_nr, "move refused: budget exceeded");
            return Ok(false);
        }

        let source = store.get_mut(from)?;
        let picked = match art_nr {
            None => source.pick_all(),
            Some(art_nr) => source.pick_all_by_nr(art_nr),
        };
        let moved = picked.len();
        store.get_mut(to)?.insert_many(picked)?;

        debug!(to = %to, from = %from, art_nr, moved, "articles moved");
        Ok(true)
    }

    /// Articles matching `art_nr` across all members, in member order.
    ///
    /// Handles no longer registered in `store` are skipped.
    pub fn find_articles<'a>(&self, store: &'a LocationStore, art_nr: &str) -> Vec<&'a Article> {
        self.locations
            .iter()
            .filter_map(|id| store.get(*id).ok())
            .flat_map(|loc| loc.articles_by_nr(art_nr))
            .collect()
    }

    /// Move all articles of `from` into `to`, then drop `from` from this stock.
    ///
    /// Returns `Ok(false)` and leaves both locations and the membership
    /// untouched if the articles do not fit. The emptied location stays in
    /// `store`.
    pub fn merge_storage_locations(
        &mut self,
        store: &mut LocationStore,
        to: StorageLocationId,
        from: StorageLocationId,
    ) -> DomainResult<bool> {
        if !self.move_all_articles(store, to, from)? {
            return Ok(false);
        }

        self.locations.retain(|id| *id != from);
        debug!(to = %to, from = %from, "storage locations merged");
        Ok(true)
    }

    fn ensure_room_for(&self, additional: usize) -> DomainResult<()> {
        if self.locations.len() + additional > self.config.max_storage_locations {
            return Err(DomainError::too_many_storage_locations(
                self.config.max_storage_locations,
            ));
        }
        Ok(())
    }
}
