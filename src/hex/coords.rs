//! This sub-module contains the coordinate value types of the hex coordinate
//! system: points and vectors in axial/cubic space, generic over their
//! scalar component. See the parent module documentation for more info on
//! the coordinate system.

use anyhow::anyhow;
use derive_more::{Add, AddAssign, Display, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Debug, Display},
    ops,
};

/// A scalar usable as a hex coordinate component. This bundles up the
/// numeric operations the coordinate algebra needs, so that points and
/// vectors can be generic over integer and floating components alike.
///
/// **Components must be signed.** Every hex coordinate with a nonzero
/// component has at least one negative component (the triple sums to zero),
/// and [HexVector::length] negates components to take absolute values, so an
/// unsigned type cannot represent the coordinate space at all.
pub trait Component:
    Copy
    + Debug
    + Display
    + PartialEq
    + PartialOrd
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Neg<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;
}

impl Component for i16 {
    fn zero() -> Self {
        0
    }

    fn one() -> Self {
        1
    }
}

impl Component for i32 {
    fn zero() -> Self {
        0
    }

    fn one() -> Self {
        1
    }
}

impl Component for f64 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }
}

/// A point in a hexagon-tiled plane. Each point has `q`, `r`, and `s`
/// components, but since `q+r+s=0` for all points, only `q` and `r` are
/// stored and `s` is derived as necessary. That saves a third of the memory
/// and makes the plane invariant impossible to violate.
///
/// Points and [HexVector]s share a representation and differ only by role:
/// a point is a position, a vector is a displacement. Points support
/// `point ± vector` and `point - point`, but not `point + point`, because
/// adding two positions is meaningless.
///
/// Equality and hashing consider only the stored `(q, r)` pair, which is
/// enough because `s` is a pure function of them.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.q()", "self.r()", "self.s()")]
pub struct HexPoint<T: Component> {
    q: T,
    r: T,
}

/// A point with `i16` components, the standard coordinate type for grid
/// storage. A grid of radius 32k would hold ~4 billion cells, so `i16` is
/// plenty and keeps point-keyed maps small.
pub type GridPoint = HexPoint<i16>;

/// A vector with `i16` components. See [GridPoint].
pub type GridVector = HexVector<i16>;

impl<T: Component> HexPoint<T> {
    /// Alias for [Self::qr]
    pub fn new(q: T, r: T) -> Self {
        Self::qr(q, r)
    }

    /// Construct a point from its `q` and `r` components; `s` is derived.
    pub fn qr(q: T, r: T) -> Self {
        Self { q, r }
    }

    /// Construct a point from its `r` and `s` components; `q` is derived.
    pub fn rs(r: T, s: T) -> Self {
        Self::qr(-r - s, r)
    }

    /// Construct a point from its `s` and `q` components; `r` is derived.
    pub fn sq(s: T, q: T) -> Self {
        Self::qr(q, -q - s)
    }

    /// Construct a point from a full `(q, r, s)` triple. Returns an error if
    /// the triple does not satisfy `q + r + s == 0`, i.e. it does not name
    /// any point of the hex plane.
    pub fn from_cube(q: T, r: T, s: T) -> anyhow::Result<Self> {
        if q + r + s != T::zero() {
            Err(anyhow!(
                "invalid hex point ({}, {}, {}); must be on the plane q+r+s=0",
                q,
                r,
                s
            ))
        } else {
            Ok(Self::qr(q, r))
        }
    }

    pub fn q(&self) -> T {
        self.q
    }

    pub fn r(&self) -> T {
        self.r
    }

    pub fn s(&self) -> T {
        -self.q - self.r
    }

    /// Calculate the path distance to another point, meaning the number of
    /// cell hops it takes to get from one to the other. 0 if the points are
    /// equal, 1 if they are adjacent, and so on.
    pub fn distance_to(self, other: Self) -> T {
        (other - self).length()
    }
}

impl GridPoint {
    pub const ORIGIN: Self = Self { q: 0, r: 0 };
}

impl<T: Component> ops::Add<HexVector<T>> for HexPoint<T> {
    type Output = HexPoint<T>;

    fn add(self, rhs: HexVector<T>) -> Self::Output {
        Self::qr(self.q + rhs.q, self.r + rhs.r)
    }
}

impl<T: Component> ops::Sub<HexVector<T>> for HexPoint<T> {
    type Output = HexPoint<T>;

    fn sub(self, rhs: HexVector<T>) -> Self::Output {
        Self::qr(self.q - rhs.q, self.r - rhs.r)
    }
}

impl<T: Component> ops::Sub<HexPoint<T>> for HexPoint<T> {
    type Output = HexVector<T>;

    fn sub(self, rhs: HexPoint<T>) -> Self::Output {
        HexVector::qr(self.q - rhs.q, self.r - rhs.r)
    }
}

impl<T: Component> ops::AddAssign<HexVector<T>> for HexPoint<T> {
    fn add_assign(&mut self, rhs: HexVector<T>) {
        *self = *self + rhs;
    }
}

impl<T: Component> ops::SubAssign<HexVector<T>> for HexPoint<T> {
    fn sub_assign(&mut self, rhs: HexVector<T>) {
        *self = *self - rhs;
    }
}

/// A displacement in a hexagon-tiled plane. This is a `(q, r, s)` kind of
/// vector, not a list vector. Like [HexPoint], only `q` and `r` are stored
/// and `q+r+s=0` always holds.
///
/// Vectors form the usual algebra: addition, negation, and multiplication/
/// division by a scalar. Arithmetic is exact for integer components; for
/// large displacements the component type must be wide enough to hold the
/// results, which is the caller's responsibility.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    Neg,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.q()", "self.r()", "self.s()")]
pub struct HexVector<T: Component> {
    q: T,
    r: T,
}

// Scalar multiply/divide. These are written per component type rather than
// as one generic impl, because a blanket `Mul<T>` would collide with the
// `Mul<Rotation>` operator defined in the rotation module.
macro_rules! impl_scalar_ops {
    ($($t:ty),*) => {$(
        impl ops::Mul<$t> for HexVector<$t> {
            type Output = Self;

            fn mul(self, scale: $t) -> Self {
                Self::qr(self.q * scale, self.r * scale)
            }
        }

        impl ops::Div<$t> for HexVector<$t> {
            type Output = Self;

            fn div(self, scale: $t) -> Self {
                Self::qr(self.q / scale, self.r / scale)
            }
        }
    )*};
}

impl_scalar_ops!(i16, i32, f64);

impl<T: Component> HexVector<T> {
    /// Alias for [Self::qr]
    pub fn new(q: T, r: T) -> Self {
        Self::qr(q, r)
    }

    /// Construct a vector from its `q` and `r` components; `s` is derived.
    pub fn qr(q: T, r: T) -> Self {
        Self { q, r }
    }

    /// Construct a vector from its `r` and `s` components; `q` is derived.
    pub fn rs(r: T, s: T) -> Self {
        Self::qr(-r - s, r)
    }

    /// Construct a vector from its `s` and `q` components; `r` is derived.
    pub fn sq(s: T, q: T) -> Self {
        Self::qr(q, -q - s)
    }

    /// Construct a vector from a full `(q, r, s)` triple. Returns an error
    /// if the triple does not satisfy `q + r + s == 0`.
    pub fn from_cube(q: T, r: T, s: T) -> anyhow::Result<Self> {
        if q + r + s != T::zero() {
            Err(anyhow!(
                "invalid hex vector ({}, {}, {}); must satisfy q+r+s=0",
                q,
                r,
                s
            ))
        } else {
            Ok(Self::qr(q, r))
        }
    }

    pub fn q(&self) -> T {
        self.q
    }

    pub fn r(&self) -> T {
        self.r
    }

    pub fn s(&self) -> T {
        -self.q - self.r
    }

    /// The hex length of this vector: the number of cell hops needed to
    /// cover the displacement. This is the maximum of the absolute `(q, r,
    /// s)` components. Because the triple sums to zero, the largest
    /// component alone balances the other two, so that maximum equals
    /// `(|q|+|r|+|s|)/2`, the textbook cube-distance formula.
    ///
    /// Taking the max over the *signed* triple would be cheaper but is
    /// wrong whenever two components are positive, e.g. `(1, 1, -2)` is two
    /// hops from the origin, not one. The ring/disk bijection reads the
    /// ring number off this value, so it has to be exact for every vector.
    pub fn length(self) -> T {
        fn abs<T: Component>(x: T) -> T {
            if x < T::zero() {
                -x
            } else {
                x
            }
        }

        let (q, r, s) = (abs(self.q()), abs(self.r()), abs(self.s()));
        if q > r {
            if q > s {
                q
            } else {
                s
            }
        } else if r > s {
            r
        } else {
            s
        }
    }
}

impl GridVector {
    pub const ZERO: Self = Self { q: 0, r: 0 };
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_component_invariant() {
        // q + r + s == 0 must hold regardless of which constructor is used
        assert_eq!(GridPoint::qr(2, -5).s(), 3);
        assert_eq!(GridPoint::rs(-5, 3), GridPoint::qr(2, -5));
        assert_eq!(GridPoint::sq(3, 2), GridPoint::qr(2, -5));
        assert_eq!(GridVector::rs(1, 1), GridVector::qr(-2, 1));
        assert_eq!(GridVector::sq(-4, 1), GridVector::qr(1, 3));

        let p = HexPoint::<f64>::rs(0.5, -2.0);
        assert_approx_eq!(p.q() + p.r() + p.s(), 0.0);

        let p = HexPoint::<i32>::sq(70_000, -100_000);
        assert_eq!(p.q() + p.r() + p.s(), 0);
    }

    #[test]
    fn test_from_cube() {
        assert_eq!(
            GridPoint::from_cube(1, -3, 2).unwrap(),
            GridPoint::qr(1, -3)
        );
        assert!(GridPoint::from_cube(1, -3, 3).is_err());
        assert_eq!(
            GridVector::from_cube(-2, 0, 2).unwrap(),
            GridVector::qr(-2, 0)
        );
        assert!(GridVector::from_cube(0, 1, 1).is_err());
    }

    #[test]
    fn test_vector_algebra() {
        let a = GridVector::qr(2, -1);
        let b = GridVector::qr(-3, 2);
        assert_eq!(a + b, GridVector::qr(-1, 1));
        assert_eq!(a - b, GridVector::qr(5, -3));
        assert_eq!(-a, GridVector::qr(-2, 1));
        assert_eq!(a * 3, GridVector::qr(6, -3));
        assert_eq!(GridVector::qr(6, -4) / 2, GridVector::qr(3, -2));
    }

    #[test]
    fn test_point_algebra() {
        let p = GridPoint::qr(1, 1);
        let v = GridVector::qr(-2, 1);
        assert_eq!(p + v, GridPoint::qr(-1, 2));
        assert_eq!(p - v, GridPoint::qr(3, 0));
        assert_eq!(GridPoint::qr(3, 0) - p, GridVector::qr(2, -1));

        let mut q = p;
        q += v;
        assert_eq!(q, GridPoint::qr(-1, 2));
        q -= v;
        assert_eq!(q, p);
    }

    #[test]
    fn test_length() {
        assert_eq!(GridVector::ZERO.length(), 0);
        assert_eq!(GridVector::qr(1, 0).length(), 1);
        assert_eq!(GridVector::qr(-1, 1).length(), 1);
        assert_eq!(GridVector::qr(2, -1).length(), 2);
        assert_eq!(GridVector::qr(-2, -1).length(), 3);
        // Two positive components; the largest-magnitude one is negative
        assert_eq!(GridVector::qr(1, 1).length(), 2);

        // The component-max shortcut must agree with (|q|+|r|+|s|)/2
        for q in -4i16..=4 {
            for r in -4i16..=4 {
                let v = GridVector::qr(q, r);
                let naive = (q.abs() + r.abs() + v.s().abs()) / 2;
                assert_eq!(v.length(), naive, "bad length for {v}");
            }
        }
    }

    #[test]
    fn test_distance_to() {
        let p0 = GridPoint::ORIGIN;
        let p1 = GridPoint::qr(-1, 1);
        let p2 = GridPoint::qr(2, -1);
        let p3 = GridPoint::qr(2, -3);

        assert_eq!(p0.distance_to(p0), 0);
        assert_eq!(p3.distance_to(p3), 0);

        assert_eq!(p0.distance_to(p1), 1);
        assert_eq!(p0.distance_to(p2), 2);
        assert_eq!(p0.distance_to(p3), 3);

        assert_eq!(p1.distance_to(p2), 3);
        assert_eq!(p1.distance_to(p3), 4);
        assert_eq!(p2.distance_to(p3), 2);

        // Distance is symmetric
        assert_eq!(p1.distance_to(p3), p3.distance_to(p1));

        // Floating components use the exact same algebra
        let a = HexPoint::<f64>::qr(0.0, 0.0);
        let b = HexPoint::<f64>::qr(1.5, -0.5);
        assert_approx_eq!(a.distance_to(b), 1.5);
    }

    #[test]
    fn test_display() {
        assert_eq!(GridPoint::qr(1, -3).to_string(), "(1, -3, 2)");
        assert_eq!(GridVector::qr(0, 2).to_string(), "(0, 2, -2)");
    }

    #[test]
    fn test_serde() {
        use serde_test::{assert_tokens, Token};

        // Only q and r go over the wire; s is rederived on the way in
        assert_tokens(
            &GridPoint::qr(2, -5),
            &[
                Token::Struct {
                    name: "HexPoint",
                    len: 2,
                },
                Token::Str("q"),
                Token::I16(2),
                Token::Str("r"),
                Token::I16(-5),
                Token::StructEnd,
            ],
        );
        assert_tokens(
            &GridVector::qr(-1, 1),
            &[
                Token::Struct {
                    name: "HexVector",
                    len: 2,
                },
                Token::Str("q"),
                Token::I16(-1),
                Token::Str("r"),
                Token::I16(1),
                Token::StructEnd,
            ],
        );
    }
}
