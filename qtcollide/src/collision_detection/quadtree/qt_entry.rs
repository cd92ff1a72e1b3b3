use std::cell::Cell;

use slotmap::{SlotMap, new_key_type};

use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::Rect;
use crate::geometry::{GeoShape, ShapeKey};

new_key_type! {
    /// Handle to a [`SpatialEntry`] in an [`EntryMap`]
    pub struct EntryKey;
}

/// Caller-owned storage of all entries a quadtree can refer to.
pub type EntryMap = SlotMap<EntryKey, SpatialEntry>;

/// The unit indexed by the quadtree: a bounding rectangle paired with a handle to the shape it bounds.
///
/// Entries are identified by their [`ShapeKey`]: two entries wrapping the same shape are indistinguishable
/// to [`QTNode::remove`](crate::collision_detection::quadtree::QTNode::remove).
#[derive(Clone, Debug)]
pub struct SpatialEntry {
    /// The shape this entry stands in for
    pub shape: ShapeKey,
    /// Axis-aligned bounds used for all routing and querying
    pub bounds: Rect,
    /// Transient traversal mark, always `false` outside of a traversal
    visited: Cell<bool>,
}

impl SpatialEntry {
    pub fn new(shape: ShapeKey, bounds: Rect) -> Self {
        Self {
            shape,
            bounds,
            visited: Cell::new(false),
        }
    }

    /// Creates an entry bounded by the bounding box of `geo_shape`
    pub fn from_shape(shape: ShapeKey, geo_shape: &GeoShape) -> Self {
        Self::new(shape, geo_shape.bbox())
    }

    pub fn is_visited(&self) -> bool {
        self.visited.get()
    }

    /// Sets the mark, returns `true` if it was not set yet.
    pub(crate) fn mark(&self) -> bool {
        !self.visited.replace(true)
    }

    pub(crate) fn unmark(&self) {
        self.visited.set(false);
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.bounds == other.bounds
    }
}
