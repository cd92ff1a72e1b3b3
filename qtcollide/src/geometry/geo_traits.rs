use crate::geometry::primitives::{Rect, Vector};

/// Trait for types that can detect collisions between `Self` and `T`.
///
/// All implementations are inclusive: touching boundaries count as a collision.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

///  Trait for types that can detect 'almost-collisions' between `Self` and `T`.
///
/// Due to floating point arithmetic precision, two objects that are very close to each other may have unexpected behavior with
/// the [CollidesWith] trait. This trait errors on the side of false positives, so that if two objects are very close to each other,
/// they will be considered as colliding.
pub trait AlmostCollidesWith<T> {
    fn almost_collides_with(&self, other: &T) -> bool;
}

/// Trait for shared properties of geometric primitives.
pub trait Shape {
    /// Geometric center of the shape
    fn centroid(&self) -> Vector;

    /// Area of the interior of the shape
    fn area(&self) -> f32;

    /// Bounding box of the shape
    fn bbox(&self) -> Rect;
}
