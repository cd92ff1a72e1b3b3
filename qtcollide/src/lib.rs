#![doc = document_features::document_features!()]
//! 2D axis-aligned primitives and an adaptive quadtree for broad-phase collision queries.

/// Everything related to broad-phase collision detection
pub mod collision_detection;

/// Geometric primitives and shape handles
pub mod geometry;

/// Importing scenes into and exporting quadtrees out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
