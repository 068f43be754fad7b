//! This sub-module contains the six-fold rotation model of the hex grid:
//! rotation values (counterclockwise 60° step counts), the six signed axes,
//! and the rotation operator on vectors.
//!
//! The flat-top axis wheel, counterclockwise from `+q`:
//!
//! ```text
//!           +r
//!      -q    |    -s
//!        \   |   /
//!         \  |  /
//!          \ | /
//!   ---------+--------- +q
//!          / | \
//!         /  |  \
//!        /   |   \
//!      +s    |    -r
//!           -q (mirror)
//! ```
//!
//! Rotating a vector one step counterclockwise permutes its axis
//! projections: the defining case is `⟨1,0⟩ * ccw(1) == ⟨0,1⟩`.

use crate::hex::coords::{Component, HexVector};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::ops;
use strum::EnumIter;

/// Normalize `n` into `[0, m)`. Rust's `%` is a remainder, not a modulus, so
/// it maps negative inputs to negative outputs and needs the extra shift.
pub(crate) fn modulo(n: i32, m: i32) -> i32 {
    ((n % m) + m) % m
}

/// A rotation of the hex grid around the origin: some number of 60°
/// counterclockwise steps, normalized into `[0, 6)`. Rotations form a group
/// of order 6 under addition, so `ccw(n)` and `ccw(n % 6)` are the same
/// value and `ccw(6)` is the identity.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Serialize,
    Deserialize,
)]
#[display(fmt = "ccw({})", steps)]
pub struct Rotation {
    steps: u8,
}

impl Rotation {
    pub const IDENTITY: Self = Self { steps: 0 };

    /// A counterclockwise rotation by `n` 60° steps. `n` may be any integer;
    /// it is normalized into `[0, 6)`.
    pub fn ccw(n: i32) -> Self {
        Self {
            steps: modulo(n, 6) as u8,
        }
    }

    /// A clockwise rotation by `n` 60° steps, i.e. `ccw(-n)`.
    pub fn cw(n: i32) -> Self {
        Self::ccw(-n)
    }

    /// The normalized step count, in `[0, 6)`.
    pub fn steps(self) -> u8 {
        self.steps
    }
}

impl ops::Add for Rotation {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::ccw(self.steps as i32 + rhs.steps as i32)
    }
}

impl ops::Add<i32> for Rotation {
    type Output = Self;

    fn add(self, n: i32) -> Self {
        Self::ccw(self.steps as i32 + n)
    }
}

impl ops::AddAssign for Rotation {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl ops::Neg for Rotation {
    type Output = Self;

    fn neg(self) -> Self {
        Self::ccw(-(self.steps as i32))
    }
}

/// The six signed axis directions of the coordinate system, in
/// counterclockwise order starting from `+q`. These are center-to-vertex
/// directions (compare [HexDirection](crate::HexDirection), which is
/// center-to-side), used for the diagonal-neighbor family and for the
/// segment boundary tests of the disk bijection.
///
/// The declaration order is load-bearing: each variant's discriminant is its
/// rotation step count from `QPos`, which is what makes modular rotation a
/// table lookup.
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// `+q`, the base axis
    QPos,
    /// `-s`, 60° counterclockwise from `+q`
    SNeg,
    /// `+r`, 120°
    RPos,
    /// `-q`, 180°
    QNeg,
    /// `+s`, 240°
    SPos,
    /// `-r`, 300°
    RNeg,
}

impl Axis {
    /// All six axes in counterclockwise rotation order, starting at `+q`.
    pub const CCW: [Self; 6] = [
        Self::QPos,
        Self::SNeg,
        Self::RPos,
        Self::QNeg,
        Self::SPos,
        Self::RNeg,
    ];

    /// The axis reached from this one by the given rotation.
    pub fn rotated(self, rotation: Rotation) -> Self {
        Self::CCW[(self as usize + rotation.steps() as usize) % 6]
    }

    /// The axis pointing the opposite way, i.e. this one rotated 3 steps.
    pub fn opposite(self) -> Self {
        self.rotated(Rotation::ccw(3))
    }
}

impl<T: Component> HexVector<T> {
    /// The signed projection of this vector onto the given axis: `q` for
    /// `+q`, `-q` for `-q`, and so on around the wheel. This is the
    /// primitive that makes rotation a permutation-with-sign-flip.
    pub fn get(self, axis: Axis) -> T {
        match axis {
            Axis::QPos => self.q(),
            Axis::SNeg => -self.s(),
            Axis::RPos => self.r(),
            Axis::QNeg => -self.q(),
            Axis::SPos => self.s(),
            Axis::RNeg => -self.r(),
        }
    }
}

impl<T: Component> ops::Mul<Rotation> for HexVector<T> {
    type Output = Self;

    /// Rotate this vector counterclockwise around the origin. The rotated
    /// vector's `q`/`r` components are read off the axes that rotate *onto*
    /// `+q` and `+r`, hence the backwards rotation of the axes.
    fn mul(self, rotation: Rotation) -> Self {
        let back = -rotation;
        Self::qr(
            self.get(Axis::QPos.rotated(back)),
            self.get(Axis::RPos.rotated(back)),
        )
    }
}

impl<T: Component> ops::MulAssign<Rotation> for HexVector<T> {
    fn mul_assign(&mut self, rotation: Rotation) {
        *self = *self * rotation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::GridVector;
    use strum::IntoEnumIterator;

    #[test]
    fn test_normalization() {
        assert_eq!(Rotation::ccw(0), Rotation::IDENTITY);
        assert_eq!(Rotation::ccw(6), Rotation::IDENTITY);
        assert_eq!(Rotation::ccw(7).steps(), 1);
        assert_eq!(Rotation::ccw(-1).steps(), 5);
        assert_eq!(Rotation::cw(2).steps(), 4);
        assert_eq!(Rotation::ccw(-13).steps(), 5);
    }

    #[test]
    fn test_group_laws() {
        assert_eq!(Rotation::ccw(2) + Rotation::ccw(5), Rotation::ccw(1));
        assert_eq!(Rotation::ccw(4) + 3, Rotation::ccw(1));
        assert_eq!(-Rotation::ccw(2), Rotation::ccw(4));
        assert_eq!(-Rotation::IDENTITY, Rotation::IDENTITY);

        let mut r = Rotation::ccw(5);
        r += Rotation::ccw(2);
        assert_eq!(r, Rotation::ccw(1));
    }

    #[test]
    fn test_defining_rotation() {
        // The one true test case: <1,0> rotates one step ccw to <0,1>
        assert_eq!(
            GridVector::qr(1, 0) * Rotation::ccw(1),
            GridVector::qr(0, 1)
        );
    }

    #[test]
    fn test_rotation_cycle() {
        // Walk the full unit cycle from <1,0>
        let expected = [
            GridVector::qr(1, 0),
            GridVector::qr(0, 1),
            GridVector::qr(-1, 1),
            GridVector::qr(-1, 0),
            GridVector::qr(0, -1),
            GridVector::qr(1, -1),
        ];
        for (n, v) in expected.iter().enumerate() {
            assert_eq!(
                GridVector::qr(1, 0) * Rotation::ccw(n as i32),
                *v,
                "bad rotation by {n} steps"
            );
        }
    }

    #[test]
    fn test_rotation_is_modular() {
        let vectors =
            [GridVector::qr(3, -1), GridVector::qr(0, 2), GridVector::ZERO];
        for v in vectors {
            assert_eq!(v * Rotation::ccw(6), v);
            for n in -12..=12 {
                assert_eq!(
                    v * Rotation::ccw(n),
                    v * Rotation::ccw(modulo(n, 6)),
                    "rotation by {n} is not modular for {v}"
                );
            }
        }
    }

    #[test]
    fn test_rotation_preserves_length() {
        let v = GridVector::qr(3, -1);
        for n in 0..6 {
            assert_eq!((v * Rotation::ccw(n)).length(), v.length());
        }
    }

    #[test]
    fn test_axis_rotation() {
        assert_eq!(Axis::QPos.rotated(Rotation::ccw(1)), Axis::SNeg);
        assert_eq!(Axis::RNeg.rotated(Rotation::ccw(1)), Axis::QPos);
        assert_eq!(Axis::RPos.rotated(Rotation::cw(2)), Axis::QPos);
        for axis in Axis::iter() {
            assert_eq!(axis.rotated(Rotation::IDENTITY), axis);
            assert_eq!(axis.opposite().opposite(), axis);
            assert_ne!(axis.opposite(), axis);
        }
    }

    #[test]
    fn test_axis_projections() {
        let v = GridVector::qr(2, -5);
        assert_eq!(v.get(Axis::QPos), 2);
        assert_eq!(v.get(Axis::QNeg), -2);
        assert_eq!(v.get(Axis::RPos), -5);
        assert_eq!(v.get(Axis::RNeg), 5);
        assert_eq!(v.get(Axis::SPos), 3);
        assert_eq!(v.get(Axis::SNeg), -3);
    }
}
