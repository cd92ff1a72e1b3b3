use std::f32::consts::PI;

use crate::geometry::geo_traits::{CollidesWith, Shape};
use crate::geometry::primitives::Rect;
use crate::geometry::primitives::Vector;

/// Geometric primitive representing a circle
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Circle {
    pub center: Vector,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vector, radius: f32) -> Self {
        debug_assert!(
            radius.is_finite() && radius >= 0.0,
            "invalid circle radius: {radius}"
        );
        debug_assert!(
            center.0.is_finite() && center.1.is_finite(),
            "invalid circle center: {center:?}"
        );

        Self { center, radius }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn center(&self) -> Vector {
        self.center
    }
}

impl CollidesWith<Circle> for Circle {
    fn collides_with(&self, other: &Circle) -> bool {
        let sq_d = self.center.sq_distance(&other.center);
        let r = self.radius + other.radius;

        sq_d <= r * r
    }
}

impl CollidesWith<Rect> for Circle {
    #[inline(always)]
    fn collides_with(&self, rect: &Rect) -> bool {
        //Based on: https://yal.cc/rectangle-circle-intersection-test/

        let Vector(c_x, c_y) = self.center;

        let nearest_x = f32::max(rect.x_min, f32::min(c_x, rect.x_max));
        let nearest_y = f32::max(rect.y_min, f32::min(c_y, rect.y_max));

        (nearest_x - c_x).powi(2) + (nearest_y - c_y).powi(2) <= self.radius.powi(2)
    }
}

impl CollidesWith<Circle> for Rect {
    fn collides_with(&self, circle: &Circle) -> bool {
        circle.collides_with(self)
    }
}

impl CollidesWith<Vector> for Circle {
    fn collides_with(&self, point: &Vector) -> bool {
        point.sq_distance(&self.center) <= self.radius.powi(2)
    }
}

impl Shape for Circle {
    fn centroid(&self) -> Vector {
        self.center
    }

    fn area(&self) -> f32 {
        self.radius * self.radius * PI
    }

    fn bbox(&self) -> Rect {
        let (r, x, y) = (self.radius, self.center.0, self.center.1);
        Rect::new(Vector(x - r, y - r), Vector(x + r, y + r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bbox_encloses_circle() {
        let c = Circle::new(Vector(5.0, -2.0), 3.0);
        assert_eq!(c.bbox(), Rect::new(Vector(2.0, -5.0), Vector(8.0, 1.0)));
        assert_eq!(c.center(), Vector(5.0, -2.0));
        assert_eq!(c.radius(), 3.0);
    }

    #[test]
    fn collisions_are_inclusive() {
        let c = Circle::new(Vector(0.0, 0.0), 1.0);
        assert!(c.collides_with(&Circle::new(Vector(2.0, 0.0), 1.0)));
        assert!(!c.collides_with(&Circle::new(Vector(2.5, 0.0), 1.0)));
        assert!(c.collides_with(&Vector(0.0, 1.0)));

        let touching = Rect::new(Vector(1.0, -1.0), Vector(2.0, 1.0));
        assert!(c.collides_with(&touching));
        assert!(touching.collides_with(&c));

        // the bounding boxes overlap, the shapes do not
        let corner = Rect::new(Vector(0.9, 0.9), Vector(2.0, 2.0));
        assert!(!c.collides_with(&corner));
    }
}
