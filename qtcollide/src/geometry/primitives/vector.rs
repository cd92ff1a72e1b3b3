use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use ordered_float::OrderedFloat;

use crate::geometry::geo_traits::CollidesWith;
use crate::util::FPA;

/// Geometric primitive representing a 2D vector (or point)
#[derive(Debug, Clone, PartialEq, Copy, Default)]
pub struct Vector(pub f32, pub f32);

impl Vector {
    pub const ZERO: Vector = Vector(0.0, 0.0);

    #[inline(always)]
    pub fn x(&self) -> f32 {
        self.0
    }

    #[inline(always)]
    pub fn y(&self) -> f32 {
        self.1
    }

    /// Euclidean norm
    pub fn magnitude(&self) -> f32 {
        self.sq_magnitude().sqrt()
    }

    pub fn sq_magnitude(&self) -> f32 {
        self.0 * self.0 + self.1 * self.1
    }

    /// Returns `self` scaled to unit length.
    /// The zero vector has no direction, callers must not normalize it.
    pub fn normalize(self) -> Vector {
        let magnitude = self.magnitude();
        debug_assert!(magnitude != 0.0, "cannot normalize a zero vector");
        self / magnitude
    }

    pub fn dot(&self, other: &Vector) -> f32 {
        self.0 * other.0 + self.1 * other.1
    }

    /// Angle (in radians, within `[0, π]`) between `self` and `other`.
    /// Undefined if either vector has zero magnitude.
    pub fn angle_between(&self, other: &Vector) -> f32 {
        let denom = self.magnitude() * other.magnitude();
        debug_assert!(denom != 0.0, "angle with a zero vector is undefined");
        //rounding can push the cosine slightly outside [-1, 1]
        let cos = (self.dot(other) / denom).clamp(-1.0, 1.0);
        cos.acos()
    }

    pub fn sq_distance(&self, other: &Vector) -> f32 {
        (self.0 - other.0).powi(2) + (self.1 - other.1).powi(2)
    }

    /// Equality with a tolerance for floating point imprecision, see [`FPA`].
    pub fn approx_eq(&self, other: &Vector) -> bool {
        FPA(self.0) == FPA(other.0) && FPA(self.1) == FPA(other.1)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector(-self.0, -self.1)
    }
}

impl Mul<f32> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f32) -> Vector {
        Vector(self.0 * rhs, self.1 * rhs)
    }
}

impl Mul<Vector> for f32 {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Vector {
        rhs * self
    }
}

impl Div<f32> for Vector {
    type Output = Vector;

    fn div(self, rhs: f32) -> Vector {
        Vector(self.0 / rhs, self.1 / rhs)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector {
    fn sub_assign(&mut self, rhs: Vector) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vector {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for Vector {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

/// Vectors with NaN components are not equal to themselves, keep them out of hashed or ordered containers.
impl Eq for Vector {}

impl Hash for Vector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        //-0.0 == 0.0, so both must hash the same
        let bits = |v: f32| match v == 0.0 {
            true => 0.0_f32.to_bits(),
            false => v.to_bits(),
        };
        bits(self.0).hash(state);
        bits(self.1).hash(state);
    }
}

/// Lexicographic on `(x, y)`, only meant for ordered containers.
impl Ord for Vector {
    fn cmp(&self, other: &Self) -> Ordering {
        (OrderedFloat(self.0), OrderedFloat(self.1))
            .cmp(&(OrderedFloat(other.0), OrderedFloat(other.1)))
    }
}

impl PartialOrd for Vector {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Vector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vector ({}, {})", self.0, self.1)
    }
}

impl From<Vector> for (f32, f32) {
    fn from(v: Vector) -> Self {
        (v.0, v.1)
    }
}

impl From<(f32, f32)> for Vector {
    fn from(v: (f32, f32)) -> Self {
        Vector(v.0, v.1)
    }
}

impl<T> CollidesWith<T> for Vector
where
    T: CollidesWith<Vector>,
{
    fn collides_with(&self, other: &T) -> bool {
        other.collides_with(self)
    }
}
