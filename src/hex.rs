//! This module holds the basic types and algorithms for hexagon grids: the
//! coordinate system, the rotation/neighbor model, the ring/disk indexing
//! bijection, and fractional-coordinate rounding.
//!
//! The coordinate system is the cube/axial system described here (we use
//! "flat topped" tiles):
//! https://www.redblobgames.com/grids/hexagons/#coordinates-cube
//!
//! Each coordinate has three components `q`, `r`, `s` satisfying
//! `q + r + s == 0`. Only `q` and `r` are stored; `s` is always derived, so
//! the invariant holds structurally and can never be violated by a stored
//! value.

mod coords;
mod disk;
mod neighbor;
mod rotation;
mod round;

pub use self::{
    coords::{Component, GridPoint, GridVector, HexPoint, HexVector},
    disk::{
        disk_index, disk_offset, disk_size, ring, ring_around, ring_index,
        ring_offset, ring_offsets, ring_size, Disk,
    },
    neighbor::HexDirection,
    rotation::{Axis, Rotation},
    round::round,
};
