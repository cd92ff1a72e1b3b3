use anyhow::Result;
use anyhow::ensure;

use crate::geometry::geo_traits::{AlmostCollidesWith, CollidesWith, Shape};
use crate::geometry::primitives::Vector;
use crate::util::FPA;

///Axis-aligned rectangle.
///`(x_min, y_min)` is the top-left corner, `(x_max, y_max)` the bottom-right one.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f32,
    pub y_min: f32,
    pub x_max: f32,
    pub y_max: f32,
}

impl Rect {
    /// Creates a rectangle from its top-left and bottom-right corners.
    /// The corners are not validated, use [`Rect::try_new`] or [`Rect::from_points`] for untrusted input.
    pub fn new(top_left: Vector, bottom_right: Vector) -> Self {
        debug_assert!(
            top_left.x() <= bottom_right.x() && top_left.y() <= bottom_right.y(),
            "inverted rectangle: {top_left} -> {bottom_right}"
        );
        Rect {
            x_min: top_left.x(),
            y_min: top_left.y(),
            x_max: bottom_right.x(),
            y_max: bottom_right.y(),
        }
    }

    /// Degenerate rectangles (zero width or height) are accepted, inverted or non-finite ones are not.
    pub fn try_new(x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> Result<Self> {
        ensure!(
            [x_min, y_min, x_max, y_max].iter().all(|v| v.is_finite()),
            "non-finite rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        ensure!(
            x_min <= x_max && y_min <= y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Smallest rectangle containing both points, regardless of which corners they are.
    pub fn from_points(p1: Vector, p2: Vector) -> Self {
        Rect {
            x_min: f32::min(p1.x(), p2.x()),
            y_min: f32::min(p1.y(), p2.y()),
            x_max: f32::max(p1.x(), p2.x()),
            y_max: f32::max(p1.y(), p2.y()),
        }
    }

    pub fn top_left(&self) -> Vector {
        Vector(self.x_min, self.y_min)
    }

    pub fn bottom_right(&self) -> Vector {
        Vector(self.x_max, self.y_max)
    }

    /// Extent of the rectangle along both axes
    pub fn size(&self) -> Vector {
        self.bottom_right() - self.top_left()
    }

    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }

    /// Exclusive overlap test: rectangles that only touch along an edge or corner do not overlap.
    /// See [`CollidesWith<Rect>`] for the inclusive variant.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.overlaps_x(other) && self.overlaps_y(other)
    }

    /// Exclusive overlap of the projections on the x-axis
    pub fn overlaps_x(&self, other: &Rect) -> bool {
        self.x_min < other.x_max && self.x_max > other.x_min
    }

    /// Exclusive overlap of the projections on the y-axis
    pub fn overlaps_y(&self, other: &Rect) -> bool {
        self.y_min < other.y_max && self.y_max > other.y_min
    }

    /// Returns the 4 equal quadrants of `self`, in clockwise order starting at the top-left:
    /// ```text
    ///  0    1
    ///  3    2
    /// ```
    pub fn quadrants(&self) -> [Self; 4] {
        let min = self.top_left();
        let max = self.bottom_right();
        let c = min + (max - min) * 0.5;

        [
            Rect::from_points(min, c),
            Rect::from_points(Vector(c.x(), min.y()), Vector(max.x(), c.y())),
            Rect::from_points(c, max),
            Rect::from_points(Vector(min.x(), c.y()), Vector(c.x(), max.y())),
        ]
    }
}

impl Shape for Rect {
    fn centroid(&self) -> Vector {
        Vector(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    fn area(&self) -> f32 {
        (self.x_max - self.x_min) * (self.y_max - self.y_min)
    }

    fn bbox(&self) -> Rect {
        *self
    }
}

impl CollidesWith<Rect> for Rect {
    #[inline(always)]
    fn collides_with(&self, other: &Rect) -> bool {
        f32::max(self.x_min, other.x_min) <= f32::min(self.x_max, other.x_max)
            && f32::max(self.y_min, other.y_min) <= f32::min(self.y_max, other.y_max)
    }
}

impl AlmostCollidesWith<Rect> for Rect {
    #[inline(always)]
    fn almost_collides_with(&self, other: &Rect) -> bool {
        FPA(f32::max(self.x_min, other.x_min)) <= FPA(f32::min(self.x_max, other.x_max))
            && FPA(f32::max(self.y_min, other.y_min)) <= FPA(f32::min(self.y_max, other.y_max))
    }
}

impl CollidesWith<Vector> for Rect {
    #[inline(always)]
    fn collides_with(&self, point: &Vector) -> bool {
        let Vector(x, y) = *point;
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }
}
