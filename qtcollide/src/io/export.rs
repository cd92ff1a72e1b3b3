use itertools::Itertools;

use crate::collision_detection::quadtree::EntryKey;
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::Rect;
use crate::io::ext_repr::{ExtQueryResult, ExtRect, ExtReport};
use crate::io::import::Scene;

/// Runs the queries and broad-phase of a scene and exports the results to an external representation.
pub fn export_report(scene: &Scene) -> ExtReport {
    let Scene {
        shapes,
        entries,
        quadtree,
        queries,
        ..
    } = scene;

    let queries = queries
        .iter()
        .map(|area| ExtQueryResult {
            area: export_rect(area),
            hits: quadtree
                .query(area, entries)
                .into_iter()
                .filter_map(|k| scene.entry_id(k))
                .sorted()
                .collect(),
        })
        .collect();

    let candidates = quadtree.collision_pairs(entries);

    let colliding_pairs = candidates
        .iter()
        .filter(|(k1, k2)| {
            let (s1, s2) = (&shapes[entries[*k1].shape], &shapes[entries[*k2].shape]);
            s1.collides_with(s2)
        })
        .filter_map(|(k1, k2)| pair_ids(scene, *k1, *k2))
        .sorted()
        .collect();

    let candidate_pairs = candidates
        .iter()
        .filter_map(|(k1, k2)| pair_ids(scene, *k1, *k2))
        .sorted()
        .collect();

    ExtReport {
        n_indexed: quadtree.n_entries(entries),
        n_nodes: quadtree.root().n_nodes(),
        queries,
        candidate_pairs,
        colliding_pairs,
    }
}

pub fn export_rect(rect: &Rect) -> ExtRect {
    ExtRect {
        x_min: rect.x_min,
        y_min: rect.y_min,
        x_max: rect.x_max,
        y_max: rect.y_max,
    }
}

/// External ids of both entries, smallest first
fn pair_ids(scene: &Scene, k1: EntryKey, k2: EntryKey) -> Option<(u64, u64)> {
    let (id1, id2) = (scene.entry_id(k1)?, scene.entry_id(k2)?);
    Some((id1.min(id2), id1.max(id2)))
}
