use itertools::Itertools;
use log::warn;

use crate::collision_detection::quadtree::{EntryKey, EntryMap, QTNode};
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::Rect;
use crate::util::QTConfig;
use crate::util::assertions;

/// Quadtree over a fixed world region, the entry point for broad-phase queries.
///
/// The tree only stores [`EntryKey`]s. Entries (and the shapes they refer to) are owned by the caller
/// and must be passed in with every operation. An entry has to stay in the [`EntryMap`] for as long as it is
/// registered in the tree, i.e. call [`QuadTree::remove`] before removing it from the map.
///
/// Not meant for concurrent use: mutations and queries must be serialized by the caller.
#[derive(Clone, Debug)]
pub struct QuadTree {
    root: QTNode,
    config: QTConfig,
}

impl QuadTree {
    pub fn new(bbox: Rect, config: QTConfig) -> Self {
        QuadTree {
            root: QTNode::new(bbox, 0),
            config,
        }
    }

    pub fn insert(&mut self, key: EntryKey, entries: &EntryMap) {
        self.root.insert(key, entries, &self.config);
        debug_assert!(assertions::qt_structure_valid(&self.root, entries, &self.config));
    }

    pub fn remove(&mut self, key: EntryKey, entries: &EntryMap) {
        self.root.remove(key, entries, &self.config);
        debug_assert!(assertions::qt_structure_valid(&self.root, entries, &self.config));
    }

    /// Repositions an entry after its bounds were modified
    pub fn update(&mut self, key: EntryKey, entries: &EntryMap) {
        self.root.update(key, entries, &self.config);
        debug_assert!(assertions::qt_structure_valid(&self.root, entries, &self.config));
    }

    /// All entries whose bounds overlap `area`, touching edges included
    pub fn query(&self, area: &Rect, entries: &EntryMap) -> Vec<EntryKey> {
        self.root.query(area, entries)
    }

    /// Number of distinct entries registered in the tree
    pub fn n_entries(&self, entries: &EntryMap) -> usize {
        let n_entries = self.root.n_entries(entries);
        debug_assert!(assertions::no_visited_entries(entries));
        n_entries
    }

    /// Entries that may collide with `key`: those overlapping its bounds, excluding every entry of the same shape.
    pub fn collision_candidates(&self, key: EntryKey, entries: &EntryMap) -> Vec<EntryKey> {
        let Some(entry) = entries.get(key) else {
            warn!("[QT] no collision candidates for unknown entry {key:?}");
            return vec![];
        };
        self.query(&entry.bounds, entries)
            .into_iter()
            .filter(|k| entries[*k].shape != entry.shape)
            .collect()
    }

    /// All unordered pairs of entries with distinct shapes whose bounds overlap.
    /// Every pair is reported once, smallest key first.
    pub fn collision_pairs(&self, entries: &EntryMap) -> Vec<(EntryKey, EntryKey)> {
        self.root
            .leaves()
            .flat_map(|leaf| {
                leaf.entries()
                    .iter()
                    .filter(move |k| entries.contains_key(**k))
                    .tuple_combinations()
                    .filter(move |(k1, k2)| {
                        let (e1, e2) = (&entries[**k1], &entries[**k2]);
                        e1.shape != e2.shape && e1.bounds.collides_with(&e2.bounds)
                    })
                    .map(|(k1, k2)| match k1 < k2 {
                        true => (*k1, *k2),
                        false => (*k2, *k1),
                    })
            })
            .unique()
            .collect()
    }

    pub fn bbox(&self) -> Rect {
        self.root.bbox
    }

    pub fn config(&self) -> &QTConfig {
        &self.config
    }

    pub fn root(&self) -> &QTNode {
        &self.root
    }
}
