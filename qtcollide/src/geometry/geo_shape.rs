use slotmap::new_key_type;

use crate::geometry::geo_traits::{CollidesWith, Shape};
use crate::geometry::primitives::{Circle, Rect, Vector};

new_key_type! {
    /// Handle to a [`GeoShape`] in caller-owned storage (a `SlotMap<ShapeKey, GeoShape>`).
    /// Only carries identity, it does not keep the shape alive.
    pub struct ShapeKey;
}

/// One of the closed set of shapes that can be indexed
#[derive(Clone, Debug, PartialEq, Copy)]
pub enum GeoShape {
    Rect(Rect),
    Circle(Circle),
}

impl Shape for GeoShape {
    fn centroid(&self) -> Vector {
        match self {
            GeoShape::Rect(r) => r.centroid(),
            GeoShape::Circle(c) => c.centroid(),
        }
    }

    fn area(&self) -> f32 {
        match self {
            GeoShape::Rect(r) => r.area(),
            GeoShape::Circle(c) => c.area(),
        }
    }

    fn bbox(&self) -> Rect {
        match self {
            GeoShape::Rect(r) => r.bbox(),
            GeoShape::Circle(c) => c.bbox(),
        }
    }
}

impl CollidesWith<Rect> for GeoShape {
    fn collides_with(&self, rect: &Rect) -> bool {
        match self {
            GeoShape::Rect(r) => r.collides_with(rect),
            GeoShape::Circle(c) => c.collides_with(rect),
        }
    }
}

impl CollidesWith<GeoShape> for GeoShape {
    fn collides_with(&self, other: &GeoShape) -> bool {
        match (self, other) {
            (GeoShape::Rect(r1), GeoShape::Rect(r2)) => r1.collides_with(r2),
            (GeoShape::Rect(r), GeoShape::Circle(c)) | (GeoShape::Circle(c), GeoShape::Rect(r)) => {
                c.collides_with(r)
            }
            (GeoShape::Circle(c1), GeoShape::Circle(c2)) => c1.collides_with(c2),
        }
    }
}

impl From<Rect> for GeoShape {
    fn from(r: Rect) -> Self {
        GeoShape::Rect(r)
    }
}

impl From<Circle> for GeoShape {
    fn from(c: Circle) -> Self {
        GeoShape::Circle(c)
    }
}
