use std::fmt;

use log::{debug, trace, warn};

use crate::chain::Chain;
use crate::entry::Entry;
use crate::error::{Result, TableError};
use crate::hash::{CharSum, SlotHash};
use crate::view::{SearchView, SlotView, TableView};

/// Number of primary slots used by [`ChainedTable::default`]
pub const DEFAULT_CAPACITY: usize = 16;

/// A fixed capacity hash table mapping `String` keys to `String` values.
///
/// Every slot index owns at most one primary [`Entry`] plus an overflow chain
/// for the keys that hash to the same index while the primary is taken.
/// The table never resizes: once every primary slot is occupied, brand-new
/// keys are rejected with [`TableError::TableFull`] while updates of stored
/// keys keep working.
///
/// `len()` only counts primary occupants, chained entries are not included.
pub struct ChainedTable<H = CharSum> {
    slots: Box<[Option<Entry>]>,
    overflow: Box<[Chain]>,
    capacity: usize,
    count: usize,
    hasher: H,
}

impl Default for ChainedTable<CharSum> {
    fn default() -> Self {
        Self::from_parts(DEFAULT_CAPACITY, CharSum)
    }
}

impl ChainedTable<CharSum> {
    /// Creates an empty table with `capacity` primary slots, hashing keys with [`CharSum`]
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_hasher(capacity, CharSum)
    }
}

impl<H: SlotHash> ChainedTable<H> {
    /// Creates an empty table with `capacity` primary slots and a custom slot hasher
    pub fn with_hasher(capacity: usize, hasher: H) -> Result<Self> {
        if capacity == 0 {
            return Err(TableError::ZeroCapacity);
        }
        Ok(Self::from_parts(capacity, hasher))
    }

    fn from_parts(capacity: usize, hasher: H) -> Self {
        let slots = (0..capacity).map(|_| None).collect();
        let overflow = (0..capacity).map(|_| Chain::new()).collect();
        Self {
            slots,
            overflow,
            capacity,
            count: 0,
            hasher,
        }
    }

    /// Returns the number of occupied primary slots
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if no primary slot is occupied
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the fixed number of primary slots
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns true once every primary slot is occupied
    pub fn is_full(&self) -> bool {
        self.count == self.capacity
    }

    /// Returns the primary occupancy (len / capacity)
    pub fn load_factor(&self) -> f64 {
        self.count as f64 / self.capacity as f64
    }

    /// Returns the slot index `key` maps to
    pub fn slot_of(&self, key: &str) -> usize {
        self.hasher.slot(key, self.capacity)
    }

    /// Number of entries waiting in the overflow chain of `index`
    pub fn chain_len(&self, index: usize) -> usize {
        self.overflow.get(index).map_or(0, Chain::len)
    }

    /// Insert a key-value pair, returning the previous value if the key was already stored.
    ///
    /// A key colliding with an occupied slot is appended to that slot's
    /// overflow chain. A key that is not stored anywhere is rejected once the
    /// table is full, without touching the table.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Option<String>> {
        let key = key.into();
        let index = self.slot_of(&key);

        let slot = &mut self.slots[index];
        match slot {
            None => {
                if self.count == self.capacity {
                    warn!("rejecting {key:?}: all {} slots are taken", self.capacity);
                    return Err(TableError::TableFull {
                        capacity: self.capacity,
                    });
                }
                *slot = Some(Entry::new(key, value));
                self.count += 1;
                Ok(None)
            }
            Some(primary) if primary.matches(&key) => Ok(Some(primary.set_value(value))),
            Some(primary) => {
                let chain = &mut self.overflow[index];
                if let Some(entry) = chain.get_mut(&key) {
                    return Ok(Some(entry.set_value(value)));
                }
                if self.count == self.capacity {
                    warn!("rejecting {key:?}: all {} slots are taken", self.capacity);
                    return Err(TableError::TableFull {
                        capacity: self.capacity,
                    });
                }
                debug!(
                    "{key:?} collides with {:?} at slot {index}, chaining behind {} entries",
                    primary.key(),
                    chain.len()
                );
                chain.push_back(Entry::new(key, value));
                Ok(None)
            }
        }
    }

    /// Get a value by key
    pub fn search(&self, key: &str) -> Option<&str> {
        let index = self.slot_of(key);
        let primary = self.slots[index].as_ref()?;
        if primary.matches(key) {
            return Some(primary.value());
        }
        self.overflow[index].get(key).map(Entry::value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.search(key).is_some()
    }

    /// Remove a key, returning its value. Missing keys are ignored.
    ///
    /// Removing a primary that has a non-empty chain moves the chain head into
    /// the primary slot, so the slot stays occupied and `len()` is unchanged.
    pub fn delete(&mut self, key: &str) -> Option<String> {
        let index = self.slot_of(key);
        let slot = &mut self.slots[index];
        let chain = &mut self.overflow[index];

        if !slot.as_ref()?.matches(key) {
            let removed = chain.remove(key)?;
            trace!("unlinked {key:?} from the chain of slot {index}");
            return Some(removed.into_value());
        }

        let removed = match chain.pop_front() {
            Some(promoted) => {
                debug!("promoting {:?} into slot {index}", promoted.key());
                slot.replace(promoted)
            }
            None => {
                self.count -= 1;
                slot.take()
            }
        };
        removed.map(Entry::into_value)
    }

    /// Drop every entry, keeping the capacity
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.overflow.iter_mut().for_each(Chain::clear);
        self.count = 0;
    }

    /// Iterate over every stored pair: each primary followed by its chain, in slot order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.slots
            .iter()
            .zip(self.overflow.iter())
            .filter_map(|(slot, chain)| {
                slot.as_ref()
                    .map(|primary| std::iter::once(primary).chain(chain.iter()))
            })
            .flatten()
            .map(|entry| (entry.key(), entry.value()))
    }

    /// Snapshot of every occupied slot, in ascending index order
    pub fn view(&self) -> TableView<'_> {
        let slots = self
            .slots
            .iter()
            .zip(self.overflow.iter())
            .enumerate()
            .filter_map(|(index, (slot, chain))| {
                slot.as_ref().map(|primary| SlotView {
                    index,
                    key: primary.key(),
                    value: primary.value(),
                    overflow: chain.iter().map(|e| (e.key(), e.value())).collect(),
                })
            })
            .collect();
        TableView { slots }
    }

    pub fn search_view<'a>(&'a self, key: &'a str) -> SearchView<'a> {
        match self.search(key) {
            Some(value) => SearchView::Found { key, value },
            None => SearchView::Missing { key },
        }
    }
}

impl<H: SlotHash> fmt::Debug for ChainedTable<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainedTable")
            .field("capacity", &self.capacity)
            .field("count", &self.count)
            .field("entries", &DebugEntries(self))
            .finish()
    }
}

struct DebugEntries<'a, H>(&'a ChainedTable<H>);

impl<H: SlotHash> fmt::Debug for DebugEntries<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}
