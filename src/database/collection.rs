use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::models::UserId;
use crate::utils::{StoreError, StoreResult};

/// Stored value plus a counter bumped on every write to its slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Versioned<V> {
    pub version: u64,
    pub value: V,
}

impl<V> Versioned<V> {
    fn initial(value: V) -> Self {
        Self { version: 0, value }
    }
}

/// Sharded concurrent map keyed by user id.
///
/// Every operation locks only the shard owning the key, so different users never
/// contend. Conditional writes compare the slot version while holding that lock.
#[derive(Debug)]
pub struct Collection<V> {
    map: DashMap<UserId, Versioned<V>>,
}

impl<V: Clone> Collection<V> {
    /// `shards` must be a power of two greater than 1 (see `Config`).
    pub fn new(shards: Option<usize>) -> Self {
        let map = match shards {
            Some(amount) => DashMap::with_shard_amount(amount),
            None => DashMap::new(),
        };
        Self { map }
    }

    pub fn insert_if_absent(&self, key: UserId, value: V) -> StoreResult<()> {
        match self.map.entry(key) {
            Entry::Occupied(_) => Err(StoreError::AlreadyExists),
            Entry::Vacant(slot) => {
                slot.insert(Versioned::initial(value));
                Ok(())
            }
        }
    }

    pub fn contains(&self, key: &UserId) -> bool {
        self.map.contains_key(key)
    }

    /// Copy of the current slot; the lock is released before returning.
    pub fn get(&self, key: &UserId) -> Option<Versioned<V>> {
        self.map.get(key).map(|slot| slot.value().clone())
    }

    /// Writes `value` only if the slot is still at `expected_version`.
    pub fn compare_and_swap(
        &self,
        key: &UserId,
        expected_version: u64,
        value: V,
    ) -> StoreResult<Versioned<V>> {
        let mut slot = self.map.get_mut(key).ok_or(StoreError::NotFound)?;
        if slot.version != expected_version {
            return Err(StoreError::ExpectedStateMismatch);
        }
        slot.version += 1;
        slot.value = value;
        Ok(slot.value().clone())
    }

    /// Unconditional overwrite; creates the slot when missing.
    pub fn replace(&self, key: UserId, value: V) -> Versioned<V> {
        match self.map.entry(key) {
            Entry::Occupied(mut slot) => {
                let version = slot.get().version + 1;
                let stored = Versioned { version, value };
                slot.insert(stored.clone());
                stored
            }
            Entry::Vacant(slot) => slot.insert(Versioned::initial(value)).value().clone(),
        }
    }

    /// Point-in-time copy of all entries. Not atomic across shards.
    pub fn entries(&self) -> Vec<(UserId, V)> {
        self.map
            .iter()
            .map(|entry| (*entry.key(), entry.value().value.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }
}
