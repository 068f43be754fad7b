//! This sub-module contains the ring/disk linear-indexing bijection: the
//! canonical enumeration of all coordinates at an exact hex distance from
//! the origin (a ring), or within a hex distance (a filled disk), and the
//! closed-form inverse that recovers a coordinate's index.
//!
//! A ring of radius `R > 0` holds `6R` cells, enumerated as six consecutive
//! segments of length `R`. Segment `k` starts at the corner `R` cells out
//! along the base direction rotated `k` steps, and walks one lattice edge
//! toward the next corner (the edge direction is always the corner
//! direction rotated two further steps). A segment owns its starting corner
//! but not its ending one, which the inverse must agree with exactly. A disk
//! is simply ring `0`, then ring `1`, and so on, each in its canonical
//! order.
//!
//! ```text
//!        +-----+                      ring 2 of the disk, with its
//!       /       \                     canonical indices:
//!  +---+   8    +---+
//!  | 9  \      /  7  |                      6 =  2 * <1,0>
//!  +     +----+      +                      8 =  6 rotated 1 step
//!  | 10 /      \  6  |                      7 =  6 + <-1,1>
//!  +---+   ..   +---+
//!       \      /                      (disk indices: +7 for the two
//!        +----+                       inner rings)
//! ```

use crate::{
    hex::{
        coords::{GridPoint, GridVector},
        neighbor::HexDirection,
        rotation::Rotation,
    },
    surface::{IndexedSurface, Surface},
};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// The number of cells on the ring of the given radius: 1 for the origin
/// "ring", `6R` otherwise.
pub fn ring_size(radius: u16) -> usize {
    if radius == 0 {
        1
    } else {
        6 * radius as usize
    }
}

/// The number of cells in a filled disk of the given radius. The rings sum
/// to `1 + 6(1 + 2 + … + R) = 1 + 3R(R+1)`: 1, 7, 19, 37, ...
pub fn disk_size(radius: u16) -> usize {
    let r = radius as usize;
    1 + 3 * r * (r + 1)
}

/// The offset of the cell at `index` within the canonical enumeration of
/// the ring of the given radius. Returns `None` for indices outside
/// `[0, ring_size(radius))` rather than fabricating a coordinate.
pub fn ring_offset(radius: u16, index: usize) -> Option<GridVector> {
    if index >= ring_size(radius) {
        return None;
    }
    if radius == 0 {
        return Some(GridVector::ZERO);
    }

    let r = radius as usize;
    let segment = (index / r) as i32;
    let corner = HexDirection::UpRight.rotated(Rotation::ccw(segment));
    // The walked edge always sits 120° from the segment's corner direction,
    // independent of which segment this is
    let edge = corner.rotated(Rotation::ccw(2));
    Some(corner.vec() * radius as i16 + edge.vec() * (index % r) as i16)
}

/// The offset of the cell at `index` within the canonical enumeration of
/// the filled disk of the given radius: ring sizes are peeled off the index
/// until it lands inside a ring. Returns `None` for indices outside
/// `[0, disk_size(radius))`.
pub fn disk_offset(radius: u16, index: usize) -> Option<GridVector> {
    let mut remainder = index;
    for ring_radius in 0..=radius {
        let size = ring_size(ring_radius);
        if remainder < size {
            return ring_offset(ring_radius, remainder);
        }
        remainder -= size;
    }
    None
}

/// The canonical index of the given offset within its own ring (the ring
/// whose radius is the offset's hex length). This is the closed-form
/// inverse of [ring_offset].
pub fn ring_index(offset: GridVector) -> usize {
    let radius = offset.length() as i32;
    if radius == 0 {
        return 0;
    }
    let (q, r, s) =
        (offset.q() as i32, offset.r() as i32, offset.s() as i32);

    // Exactly one component sits at ±radius for every ring cell, except at
    // the six corners where two do. The tests therefore run in a fixed
    // priority order, arranged so that each corner resolves to the segment
    // that *starts* there, matching the forward enumeration's ownership
    // rule. Reordering these tests breaks the round trip at the corners.
    #[allow(clippy::if_same_then_else)]
    let index = if s == -radius {
        // segment 0, from <R,0> toward <0,R>
        r
    } else if r == radius {
        // segment 1, from <0,R> toward <-R,R>
        radius - q
    } else if q == -radius {
        // segment 2, from <-R,R> toward <-R,0>
        2 * radius + s
    } else if s == radius {
        // segment 3, from <-R,0> toward <0,-R>
        4 * radius + q
    } else if r == -radius {
        // segment 4, from <0,-R> toward <R,-R>
        4 * radius + q
    } else {
        // q == radius: segment 5, from <R,-R> back toward <R,0>, minus the
        // corner <R,0> itself, which the first test already assigned to
        // segment 0
        6 * radius + r
    };
    index as usize
}

/// The canonical index of the given offset within any disk large enough to
/// contain it: the total size of all inner rings, plus the offset's index
/// within its own ring. This is the closed-form inverse of [disk_offset].
pub fn disk_index(offset: GridVector) -> usize {
    let radius = offset.length() as u16;
    if radius == 0 {
        0
    } else {
        disk_size(radius - 1) + ring_index(offset)
    }
}

/// Iterate the offsets of a ring in canonical order.
pub fn ring_offsets(radius: u16) -> impl Iterator<Item = GridVector> {
    (0..ring_size(radius)).filter_map(move |index| ring_offset(radius, index))
}

/// Iterate the points of the ring of the given radius around a center
/// point, in canonical order.
pub fn ring_around(
    center: GridPoint,
    radius: u16,
) -> impl Iterator<Item = GridPoint> {
    ring_offsets(radius).map(move |offset| center + offset)
}

/// Iterate the points of the ring of the given radius around the origin, in
/// canonical order.
pub fn ring(radius: u16) -> impl Iterator<Item = GridPoint> {
    ring_around(GridPoint::ORIGIN, radius)
}

/// A filled hexagonal disk around the origin: every point within `radius`
/// hops of the origin, bijectively indexed in canonical ring order. This is
/// the concrete region type behind the [Surface]/[IndexedSurface]
/// contracts, so it can parametrize the bounded and indexed maps.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    Serialize,
    Deserialize,
)]
#[display(fmt = "disk({})", radius)]
pub struct Disk {
    radius: u16,
}

impl Disk {
    /// A disk holding every point within `radius` hops of the origin.
    /// Radius 0 is the origin alone, 1 is 7 cells, 2 is 19, etc.
    pub fn new(radius: u16) -> Self {
        Self { radius }
    }

    /// Distance from the origin to the rim, in cell hops.
    pub fn radius(&self) -> u16 {
        self.radius
    }
}

impl Surface for Disk {
    type Position = GridPoint;

    fn contains(&self, position: &GridPoint) -> bool {
        (*position - GridPoint::ORIGIN).length() as u16 <= self.radius
    }

    fn size(&self) -> usize {
        disk_size(self.radius)
    }
}

impl IndexedSurface for Disk {
    fn position_at(&self, index: usize) -> Option<GridPoint> {
        disk_offset(self.radius, index)
            .map(|offset| GridPoint::ORIGIN + offset)
    }

    fn index_of(&self, position: &GridPoint) -> Option<usize> {
        if self.contains(position) {
            Some(disk_index(*position - GridPoint::ORIGIN))
        } else {
            None
        }
    }
}
