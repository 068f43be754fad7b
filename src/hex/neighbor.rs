//! This sub-module contains the adjacency model: the six side-to-side
//! directions, unit vectors, and the neighbor/diagonal-neighbor operations
//! on points.
//!
//! Two parallel six-way enumerations exist. [HexDirection] is
//! center-to-side: following it from a cell lands on the adjacent cell
//! sharing that side. [Axis](crate::Axis) is center-to-vertex: following the
//! diagonal vector for an axis lands on the cell *across* that vertex, two
//! hops away. Both are closed under the same modulo-6 rotation arithmetic
//! and are offset from each other by a fixed 30°.

use crate::hex::{
    coords::{Component, HexPoint, HexVector},
    rotation::{Axis, Rotation},
};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// The 6 directions in which hex cells line up side-to-side (we use "flat
/// topped" tiles). Each value is the unit vector `⟨1,0⟩` rotated by its
/// step count, so the declaration order doubles as the counterclockwise
/// rotation order and the discriminants feed the modular arithmetic.
///
/// See https://www.redblobgames.com/grids/hexagons/#neighbors
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HexDirection {
    /// `⟨1, 0⟩`, the base direction
    UpRight,
    /// `⟨0, 1⟩`
    Up,
    /// `⟨-1, 1⟩`
    UpLeft,
    /// `⟨-1, 0⟩`
    DownLeft,
    /// `⟨0, -1⟩`
    Down,
    /// `⟨1, -1⟩`
    DownRight,
}

impl HexDirection {
    /// All six directions in counterclockwise rotation order, starting at
    /// [Self::UpRight].
    pub const CCW: [Self; 6] = [
        Self::UpRight,
        Self::Up,
        Self::UpLeft,
        Self::DownLeft,
        Self::Down,
        Self::DownRight,
    ];

    /// The unit vector that moves a point one cell in this direction.
    pub fn vec<T: Component>(self) -> HexVector<T> {
        let one = T::one();
        let zero = T::zero();
        match self {
            Self::UpRight => HexVector::qr(one, zero),
            Self::Up => HexVector::qr(zero, one),
            Self::UpLeft => HexVector::qr(-one, one),
            Self::DownLeft => HexVector::qr(-one, zero),
            Self::Down => HexVector::qr(zero, -one),
            Self::DownRight => HexVector::qr(one, -one),
        }
    }

    /// The direction reached from this one by the given rotation.
    pub fn rotated(self, rotation: Rotation) -> Self {
        Self::CCW[(self as usize + rotation.steps() as usize) % 6]
    }

    /// The direction pointing the opposite way, i.e. this one rotated 3
    /// steps. Stepping a point in a direction and then in its opposite
    /// always returns to the starting point.
    pub fn opposite(self) -> Self {
        self.rotated(Rotation::ccw(3))
    }
}

impl Axis {
    /// The diagonal-neighbor vector for this axis: the displacement from a
    /// cell's center, across the vertex on this axis, to the cell on the
    /// other side. This is `⟨1, 1⟩` (the sum of the two base unit vectors)
    /// rotated by the axis' step count, and always has hex length 2.
    pub fn diagonal_vec<T: Component>(self) -> HexVector<T> {
        let base: HexVector<T> =
            HexDirection::UpRight.vec() + HexDirection::Up.vec();
        base * Rotation::ccw(self as i32)
    }
}

impl<T: Component> HexPoint<T> {
    /// The adjacent point one cell away in the given direction.
    pub fn neighbor(self, direction: HexDirection) -> Self {
        self + direction.vec()
    }

    /// Get an iterator of all the points directly adjacent to this one. The
    /// iterator will always contain exactly 6 values.
    pub fn adjacents(self) -> impl Iterator<Item = Self> {
        HexDirection::iter().map(move |direction| self.neighbor(direction))
    }

    /// The point across the vertex on the given axis, two cells away.
    pub fn diagonal_neighbor(self, axis: Axis) -> Self {
        self + axis.diagonal_vec()
    }

    /// Get an iterator of the 6 diagonal neighbors of this point, one per
    /// axis.
    pub fn diagonals(self) -> impl Iterator<Item = Self> {
        Axis::iter().map(move |axis| self.diagonal_neighbor(axis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::{GridPoint, GridVector};

    #[test]
    fn test_unit_vectors_follow_rotation() {
        // The vector table is just <1,0> rotated by each discriminant
        for (n, direction) in HexDirection::CCW.iter().enumerate() {
            assert_eq!(
                direction.vec::<i16>(),
                GridVector::qr(1, 0) * Rotation::ccw(n as i32),
                "bad unit vector for {direction:?}"
            );
            assert_eq!(direction.vec::<i16>().length(), 1);
        }
    }

    #[test]
    fn test_rotated() {
        assert_eq!(
            HexDirection::UpRight.rotated(Rotation::ccw(1)),
            HexDirection::Up
        );
        assert_eq!(
            HexDirection::DownRight.rotated(Rotation::ccw(1)),
            HexDirection::UpRight
        );
        assert_eq!(
            HexDirection::Up.rotated(Rotation::cw(2)),
            HexDirection::DownRight
        );
        assert_eq!(HexDirection::UpLeft.opposite(), HexDirection::DownRight);
    }

    #[test]
    fn test_neighbor_symmetry() {
        // Stepping out and back in the opposite direction is a no-op
        let points = [
            GridPoint::ORIGIN,
            GridPoint::qr(3, -1),
            GridPoint::qr(-2, -2),
        ];
        for point in points {
            for direction in HexDirection::iter() {
                assert_eq!(
                    point.neighbor(direction).neighbor(direction.opposite()),
                    point,
                    "asymmetric neighbor for {point} {direction:?}"
                );
            }
        }
    }

    #[test]
    fn test_adjacents() {
        let point = GridPoint::qr(2, -1);
        let adjacents: Vec<_> = point.adjacents().collect();
        assert_eq!(adjacents.len(), 6);
        for adjacent in adjacents {
            assert_eq!(point.distance_to(adjacent), 1);
        }
    }

    #[test]
    fn test_diagonals() {
        // Base diagonal is i + j, and the rest follow by rotation
        assert_eq!(Axis::QPos.diagonal_vec::<i16>(), GridVector::qr(1, 1));
        assert_eq!(Axis::SNeg.diagonal_vec::<i16>(), GridVector::qr(-1, 2));

        let point = GridPoint::qr(-1, 3);
        let diagonals: Vec<_> = point.diagonals().collect();
        assert_eq!(diagonals.len(), 6);
        for diagonal in diagonals {
            assert_eq!(point.distance_to(diagonal), 2);
        }
    }
}
