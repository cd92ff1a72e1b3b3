use log::error;

use crate::collision_detection::quadtree::{EntryMap, QTNode};
use crate::geometry::geo_traits::CollidesWith;
use crate::util::QTConfig;
//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

/// Checks the structural invariants of a (sub)tree:
/// internal nodes have four children laid out over their quadrants and no entries of their own,
/// no node exceeds the maximum depth, every registered entry overlaps the leaf holding it
/// and no traversal marks are left behind.
pub fn qt_structure_valid(node: &QTNode, entries: &EntryMap, config: &QTConfig) -> bool {
    if node.depth > 0 && node.depth >= config.max_depth {
        error!(
            "[QT] node {:?} at depth {}, max depth is {}",
            node.bbox, node.depth, config.max_depth
        );
        return false;
    }
    match node.children() {
        Some(children) => {
            if !node.entries().is_empty() {
                error!("[QT] internal node {:?} holds entries", node.bbox);
                return false;
            }
            let quadrants = node.bbox.quadrants();
            children
                .iter()
                .zip(quadrants.iter())
                .all(|(child, quad)| {
                    child.depth == node.depth + 1
                        && child.bbox == *quad
                        && qt_structure_valid(child, entries, config)
                })
        }
        None => node
            .entries()
            .iter()
            .filter_map(|k| entries.get(*k))
            .all(|e| {
                let valid = e.bounds.collides_with(&node.bbox) && !e.is_visited();
                if !valid {
                    error!(
                        "[QT] leaf {:?} holds invalid entry {:?} (visited: {})",
                        node.bbox,
                        e.bounds,
                        e.is_visited()
                    );
                }
                valid
            }),
    }
}

/// Checks that no entry in the map carries a traversal mark
pub fn no_visited_entries(entries: &EntryMap) -> bool {
    entries.values().all(|e| !e.is_visited())
}
