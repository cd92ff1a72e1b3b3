use log::{debug, trace, warn};

use crate::collision_detection::quadtree::{EntryKey, EntryMap};
use crate::geometry::ShapeKey;
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::Rect;
use crate::util::QTConfig;
use itertools::Itertools;

/// Quadtree node.
///
/// A node is either a leaf holding entry keys directly, or an internal node with exactly four children and no entries.
/// Entries whose bounds straddle a quadrant boundary are registered in every overlapping leaf.
#[derive(Clone, Debug)]
pub struct QTNode {
    /// The depth of the node in the tree, 0 being the root
    pub depth: u8,
    /// The bounding box of the node
    pub bbox: Rect,
    /// The children of the node, if any, in the order of [`Rect::quadrants`]
    children: Option<Box<[QTNode; 4]>>,
    /// The entries registered in the node, always empty for internal nodes
    entries: Vec<EntryKey>,
}

impl QTNode {
    pub fn new(bbox: Rect, depth: u8) -> Self {
        QTNode {
            depth,
            bbox,
            children: None,
            entries: vec![],
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    pub fn children(&self) -> Option<&[QTNode; 4]> {
        self.children.as_deref()
    }

    /// Keys registered directly in this node (empty for internal nodes)
    pub fn entries(&self) -> &[EntryKey] {
        &self.entries
    }

    /// Registers the entry in this node, splitting the node if it becomes too crowded.
    /// Entries that do not overlap the node are ignored.
    pub fn insert(&mut self, key: EntryKey, entries: &EntryMap, config: &QTConfig) {
        let Some(entry) = entries.get(key) else {
            warn!("[QT] cannot insert unknown entry {key:?}");
            return;
        };
        if !entry.bounds.collides_with(&self.bbox) {
            warn!(
                "[QT] entry {key:?} ({:?}) does not overlap node {:?}, ignored",
                entry.bounds, self.bbox
            );
            return;
        }

        if self.is_leaf() && self.entries.len() + 1 > config.max_entries_per_leaf {
            self.split(entries, config);
        }

        match self.children.as_mut() {
            None => self.entries.push(key),
            Some(children) => children
                .iter_mut()
                .filter(|child| entry.bounds.collides_with(&child.bbox))
                .for_each(|child| child.insert(key, entries, config)),
        }
    }

    /// Removes the first registration of the entry's shape from every leaf it appears in,
    /// then merges subtrees that became sparse.
    pub fn remove(&mut self, key: EntryKey, entries: &EntryMap, config: &QTConfig) {
        match entries.get(key) {
            Some(entry) => self.remove_shape(entry.shape, entries, config),
            None => warn!("[QT] cannot remove unknown entry {key:?}"),
        }
    }

    fn remove_shape(&mut self, shape: ShapeKey, entries: &EntryMap, config: &QTConfig) {
        match self.children.as_mut() {
            None => {
                let pos = self
                    .entries
                    .iter()
                    .position(|k| entries.get(*k).is_some_and(|e| e.shape == shape));
                if let Some(pos) = pos {
                    self.entries.remove(pos);
                }
            }
            Some(children) => {
                //the shape may be registered in any of the children
                children
                    .iter_mut()
                    .for_each(|child| child.remove_shape(shape, entries, config));
            }
        }
        self.shake(entries, config);
    }

    /// Full removal followed by a reinsertion, to be called after the entry's bounds changed.
    pub fn update(&mut self, key: EntryKey, entries: &EntryMap, config: &QTConfig) {
        self.remove(key, entries, config);
        self.insert(key, entries, config);
    }

    /// Turns a leaf into an internal node with four children and redistributes its entries among them.
    /// Does nothing if the children would reach the maximum depth.
    pub fn split(&mut self, entries: &EntryMap, config: &QTConfig) {
        if !self.is_leaf() {
            return;
        }
        if self.depth + 1 >= config.max_depth {
            debug!(
                "[QT] node {:?} at depth {} not split, max depth ({}) reached",
                self.bbox, self.depth, config.max_depth
            );
            return;
        }
        trace!("[QT] splitting node {:?} at depth {}", self.bbox, self.depth);

        let children = self
            .bbox
            .quadrants()
            .map(|quad| QTNode::new(quad, self.depth + 1));
        self.children = Some(Box::new(children));

        for key in std::mem::take(&mut self.entries) {
            self.insert(key, entries, config);
        }
    }

    /// Collapses the subtree into a single leaf if it holds fewer than `max_entries_per_leaf` distinct entries.
    pub fn shake(&mut self, entries: &EntryMap, config: &QTConfig) {
        if self.is_leaf() {
            return;
        }
        let n_entries = self.n_entries(entries);
        if n_entries == 0 {
            self.children = None;
        } else if n_entries < config.max_entries_per_leaf {
            let mut merged = Vec::with_capacity(n_entries);
            self.reset_marks(entries);
            for leaf in self.leaves() {
                for &key in leaf.entries.iter() {
                    if entries.get(key).is_some_and(|e| e.mark()) {
                        merged.push(key);
                    }
                }
            }
            self.reset_marks(entries);

            self.children = None;
            self.entries = merged;
        }
    }

    /// Number of distinct entries registered in the subtree.
    /// Entries present in multiple leaves are counted once.
    pub fn n_entries(&self, entries: &EntryMap) -> usize {
        self.reset_marks(entries);
        let mut count = 0;
        for leaf in self.leaves() {
            for &key in leaf.entries.iter() {
                if entries.get(key).is_some_and(|e| e.mark()) {
                    count += 1;
                }
            }
        }
        self.reset_marks(entries);
        count
    }

    /// Clears the traversal mark of every entry in the subtree
    pub fn reset_marks(&self, entries: &EntryMap) {
        self.leaves()
            .flat_map(|leaf| leaf.entries.iter())
            .filter_map(|key| entries.get(*key))
            .for_each(|e| e.unmark());
    }

    /// Returns the keys of all entries in the subtree whose bounds overlap `area` (touching included).
    /// Every key is reported once, in no particular order.
    pub fn query(&self, area: &Rect, entries: &EntryMap) -> Vec<EntryKey> {
        let mut hits = vec![];
        self.collect_overlapping(area, entries, &mut hits);
        hits.into_iter().unique().collect()
    }

    fn collect_overlapping(&self, area: &Rect, entries: &EntryMap, hits: &mut Vec<EntryKey>) {
        if !area.collides_with(&self.bbox) {
            return;
        }
        match &self.children {
            None => hits.extend(
                self.entries
                    .iter()
                    .copied()
                    .filter(|k| entries.get(*k).is_some_and(|e| e.bounds.collides_with(area))),
            ),
            Some(children) => children
                .iter()
                .for_each(|child| child.collect_overlapping(area, entries, hits)),
        }
    }

    /// Depth-first iterator over all leaves of the subtree
    pub fn leaves(&self) -> impl Iterator<Item = &QTNode> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            while let Some(node) = stack.pop() {
                match &node.children {
                    Some(children) => stack.extend(children.iter()),
                    None => return Some(node),
                }
            }
            None
        })
    }

    /// Total number of nodes in the subtree, including `self`
    pub fn n_nodes(&self) -> usize {
        1 + self
            .children
            .iter()
            .flat_map(|c| c.iter())
            .map(|c| c.n_nodes())
            .sum::<usize>()
    }

    /// Depth of the deepest leaf in the subtree
    pub fn max_depth_reached(&self) -> u8 {
        self.leaves().map(|l| l.depth).max().unwrap_or(self.depth)
    }
}
