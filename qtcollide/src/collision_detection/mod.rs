/// Everything related to the quadtree
pub mod quadtree;

#[doc(inline)]
pub use quadtree::QuadTree;
