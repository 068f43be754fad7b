//! Sparse key/value storage over the grid. One associative core,
//! [SparseMap], carries all the container behavior; [BoundedMap] and
//! [IndexedMap] are thin compositions that inject a region (any
//! [Surface]/[IndexedSurface]) to add validity checking and index
//! translation. There is no inheritance chain: "bounded" and "indexed" are
//! configurations of the same core, not subtypes.
//!
//! Unoccupied keys are absent, never stored as defaults, and writes outside
//! a map's region are rejected rather than stored, so a map's contents are
//! always a subset of its region. Iteration order is whatever the hash map
//! yields and must not be relied upon.
//!
//! None of these containers synchronize internally. Concurrent readers are
//! fine; any writer must be exclusive, which `&mut self` already enforces
//! within safe Rust. Wrap a map in a lock to share it across threads.

use crate::{
    hex::GridPoint,
    surface::{IndexedSurface, Surface},
};
use fnv::FnvBuildHasher;
use std::{collections::HashMap, hash::Hash, ops::Range};

/// A sparse map keyed by grid points, the most common instantiation.
pub type PointMap<T> = SparseMap<GridPoint, T>;

/// An unbound sparse associative container: any key is accepted. This is a
/// thin veneer over a hash map (with the fast FNV hasher, since keys are
/// tiny) that fixes the operation vocabulary shared by all map variants.
#[derive(Clone, Debug)]
pub struct SparseMap<K, V> {
    content: HashMap<K, V, FnvBuildHasher>,
}

impl<K: Eq + Hash, V> SparseMap<K, V> {
    pub fn new() -> Self {
        Self {
            content: HashMap::default(),
        }
    }

    /// The value stored at the key, if any.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.content.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.content.get_mut(key)
    }

    /// The value stored at the key, or the given fallback if the key is
    /// unoccupied.
    pub fn get_or<'a>(&'a self, key: &K, fallback: &'a V) -> &'a V {
        self.get(key).unwrap_or(fallback)
    }

    /// Store a value at the key, overwriting any previous value, and return
    /// a reference to the stored value.
    pub fn set(&mut self, key: K, value: V) -> &mut V {
        use std::collections::hash_map::Entry;
        match self.content.entry(key) {
            Entry::Occupied(mut entry) => {
                entry.insert(value);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(value),
        }
    }

    /// Is there a value stored at the key?
    pub fn contains(&self, key: &K) -> bool {
        self.content.contains_key(key)
    }

    /// The number of occupied keys.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.content.clear();
    }

    /// All `(key, value)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.content.iter()
    }

    /// All occupied keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.content.keys()
    }

    /// All stored values, in no particular order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.content.values()
    }
}

impl<K: Eq + Hash, V> Default for SparseMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// A sparse map restricted to a region. The region (any [Surface]) is held
/// by value and consulted before every read and write: reads outside it are
/// absent, writes outside it are rejected without storing anything.
#[derive(Clone, Debug)]
pub struct BoundedMap<S: Surface, V> {
    bounds: S,
    content: SparseMap<S::Position, V>,
}

impl<S: Surface, V> BoundedMap<S, V>
where
    S::Position: Eq + Hash,
{
    pub fn new(bounds: S) -> Self {
        Self {
            bounds,
            content: SparseMap::new(),
        }
    }

    /// The region this map is restricted to.
    pub fn bounds(&self) -> &S {
        &self.bounds
    }

    /// The number of positions in the region (not the number of stored
    /// values; see [Self::len] for that).
    pub fn area(&self) -> usize {
        self.bounds.size()
    }

    /// Is the position inside the region? Validity says nothing about
    /// whether a value is stored there.
    pub fn is_valid(&self, position: &S::Position) -> bool {
        self.bounds.contains(position)
    }

    /// The value stored at the position. Absent for unoccupied *and* for
    /// out-of-region positions.
    pub fn get(&self, position: S::Position) -> Option<&V> {
        if self.is_valid(&position) {
            self.content.get(&position)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, position: S::Position) -> Option<&mut V> {
        if self.bounds.contains(&position) {
            self.content.get_mut(&position)
        } else {
            None
        }
    }

    /// The value stored at the position, or the fallback if the position is
    /// unoccupied or outside the region.
    pub fn get_or<'a>(
        &'a self,
        position: S::Position,
        fallback: &'a V,
    ) -> &'a V {
        self.get(position).unwrap_or(fallback)
    }

    /// Store a value at the position, overwriting any previous value.
    /// Returns a reference to the stored value, or `None` if the position
    /// is outside the region, in which case nothing is stored.
    pub fn set(&mut self, position: S::Position, value: V) -> Option<&mut V> {
        if self.bounds.contains(&position) {
            Some(self.content.set(position, value))
        } else {
            None
        }
    }

    /// Is there a value stored at the position? Always false outside the
    /// region.
    pub fn contains(&self, position: &S::Position) -> bool {
        self.content.contains(position)
    }

    /// The number of stored values.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn clear(&mut self) {
        self.content.clear();
    }

    /// All `(position, value)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&S::Position, &V)> {
        self.content.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &S::Position> {
        self.content.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.content.values()
    }
}

/// A sparse map over an index-bijective region. Values are keyed by the
/// region's canonical linear index, which keeps the keys dense and tiny,
/// but every operation also exists in a position flavor that translates
/// through [IndexedSurface::index_of] first. Out-of-region positions and
/// out-of-range indices behave exactly like [BoundedMap]'s invalid keys:
/// absent on read, rejected on write.
#[derive(Clone, Debug)]
pub struct IndexedMap<S: IndexedSurface, V> {
    bounds: S,
    content: SparseMap<usize, V>,
}

impl<S: IndexedSurface, V> IndexedMap<S, V> {
    pub fn new(bounds: S) -> Self {
        Self {
            bounds,
            content: SparseMap::new(),
        }
    }

    /// The region this map is indexed by.
    pub fn bounds(&self) -> &S {
        &self.bounds
    }

    /// The number of positions in the region.
    pub fn area(&self) -> usize {
        self.bounds.size()
    }

    /// Translation fast path: the position at a canonical index.
    pub fn position_at(&self, index: usize) -> Option<S::Position> {
        self.bounds.position_at(index)
    }

    /// Translation fast path: the canonical index of a position.
    pub fn index_of(&self, position: &S::Position) -> Option<usize> {
        self.bounds.index_of(position)
    }

    /// All indices of the region, in canonical order.
    pub fn indices(&self) -> Range<usize> {
        self.bounds.indices()
    }

    /// All positions of the region, in canonical order.
    pub fn positions(&self) -> impl Iterator<Item = S::Position> + '_ {
        self.bounds.positions()
    }

    pub fn is_valid(&self, position: &S::Position) -> bool {
        self.bounds.contains(position)
    }

    pub fn is_valid_index(&self, index: usize) -> bool {
        self.bounds.is_valid_index(index)
    }

    /// The value stored at the position. Absent for unoccupied and for
    /// out-of-region positions.
    pub fn get(&self, position: S::Position) -> Option<&V> {
        let index = self.bounds.index_of(&position)?;
        self.content.get(&index)
    }

    pub fn get_mut(&mut self, position: S::Position) -> Option<&mut V> {
        let index = self.bounds.index_of(&position)?;
        self.content.get_mut(&index)
    }

    /// The value stored at the position, or the fallback if the position is
    /// unoccupied or outside the region.
    pub fn get_or<'a>(
        &'a self,
        position: S::Position,
        fallback: &'a V,
    ) -> &'a V {
        self.get(position).unwrap_or(fallback)
    }

    /// Store a value at the position. Returns a reference to the stored
    /// value, or `None` (storing nothing) if the position is outside the
    /// region.
    pub fn set(&mut self, position: S::Position, value: V) -> Option<&mut V> {
        let index = self.bounds.index_of(&position)?;
        Some(self.content.set(index, value))
    }

    /// Is there a value stored at the position?
    pub fn contains(&self, position: &S::Position) -> bool {
        self.bounds
            .index_of(position)
            .map_or(false, |index| self.content.contains(&index))
    }

    /// The value stored at the index, skipping position translation.
    pub fn get_index(&self, index: usize) -> Option<&V> {
        if self.is_valid_index(index) {
            self.content.get(&index)
        } else {
            None
        }
    }

    pub fn get_index_mut(&mut self, index: usize) -> Option<&mut V> {
        if self.is_valid_index(index) {
            self.content.get_mut(&index)
        } else {
            None
        }
    }

    pub fn get_index_or<'a>(
        &'a self,
        index: usize,
        fallback: &'a V,
    ) -> &'a V {
        self.get_index(index).unwrap_or(fallback)
    }

    /// Store a value at the index. Returns `None` (storing nothing) if the
    /// index is outside the region's range.
    pub fn set_index(&mut self, index: usize, value: V) -> Option<&mut V> {
        if self.is_valid_index(index) {
            Some(self.content.set(index, value))
        } else {
            None
        }
    }

    pub fn contains_index(&self, index: usize) -> bool {
        self.content.contains(&index)
    }

    /// The number of stored values.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn clear(&mut self) {
        self.content.clear();
    }

    /// All `(index, value)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &V)> {
        self.content.iter().map(|(index, value)| (*index, value))
    }

    /// All occupied indices, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = usize> + '_ {
        self.content.keys().copied()
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.content.values()
    }
}
