//! Hexal is a coordinate-geometry toolkit for hexagonal grids. It provides
//! axial/cubic hex coordinates with the usual vector algebra, the six-fold
//! rotation and neighbor model, a canonical bijection between linear indices
//! and coordinates for rings and filled disks, and generic sparse maps that
//! layer key/value storage on top of any bounded region.
//!
//! ```
//! use hexal::{Disk, GridPoint, IndexedMap};
//!
//! let mut map: IndexedMap<Disk, char> = IndexedMap::new(Disk::new(2));
//! map.set(GridPoint::ORIGIN, 'a');
//! assert_eq!(map.get(GridPoint::ORIGIN), Some(&'a'));
//! // Points outside the disk are rejected, not stored
//! assert_eq!(map.set(GridPoint::new(3, 0), 'b'), None);
//! ```
//!
//! Everything here is a pure, single-threaded computation: no I/O, no
//! internal locking. Coordinate and region values are immutable and freely
//! shareable across threads; maps must be externally serialized if shared.

mod hex;
mod map;
mod surface;

pub use crate::{
    hex::{
        disk_index, disk_offset, disk_size, ring, ring_around, ring_index,
        ring_offset, ring_offsets, ring_size, round, Axis, Component, Disk,
        GridPoint, GridVector, HexDirection, HexPoint, HexVector, Rotation,
    },
    map::{BoundedMap, IndexedMap, PointMap, SparseMap},
    surface::{IndexedSurface, Surface},
};
