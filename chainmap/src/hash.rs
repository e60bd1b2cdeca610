use std::hash::BuildHasher;

use rustc_hash::FxBuildHasher;

/// Maps a key to a slot index in `[0, capacity)`.
///
/// The reduction always uses the capacity of the table asking for the index,
/// so an implementation never has to know about a global table size.
pub trait SlotHash {
    fn slot(&self, key: &str, capacity: usize) -> usize;
}

/// Sum of the character codes of the key, reduced modulo the capacity.
///
/// Cheap and predictable: anagrams always collide, which makes it handy for
/// exercising the overflow chains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharSum;

impl CharSum {
    pub fn sum(key: &str) -> usize {
        key.chars().fold(0usize, |acc, c| acc.wrapping_add(c as usize))
    }
}

impl SlotHash for CharSum {
    fn slot(&self, key: &str, capacity: usize) -> usize {
        Self::sum(key) % capacity
    }
}

impl SlotHash for FxBuildHasher {
    fn slot(&self, key: &str, capacity: usize) -> usize {
        self.hash_one(key) as usize % capacity
    }
}
