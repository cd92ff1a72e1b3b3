use std::collections::HashSet;

use anyhow::{Context, Result, bail, ensure};
use log::{info, warn};
use slotmap::{SecondaryMap, SlotMap};

use crate::collision_detection::QuadTree;
use crate::collision_detection::quadtree::{EntryKey, EntryMap, SpatialEntry};
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::{Circle, Rect, Vector};
use crate::geometry::{GeoShape, ShapeKey};
use crate::io::ext_repr::{ExtRect, ExtScene, ExtShape};
use crate::util::QTConfig;

/// Converts external representations of scenes into internal ones.
#[derive(Clone, Debug, Copy, Default)]
pub struct Importer {
    pub qt_config: QTConfig,
}

impl Importer {
    pub fn new(qt_config: QTConfig) -> Importer {
        Importer { qt_config }
    }

    pub fn import_rect(&self, ext_rect: &ExtRect) -> Result<Rect> {
        let ExtRect {
            x_min,
            y_min,
            x_max,
            y_max,
        } = *ext_rect;
        Rect::try_new(x_min, y_min, x_max, y_max)
    }

    pub fn import_shape(&self, ext_shape: &ExtShape) -> Result<GeoShape> {
        match *ext_shape {
            ExtShape::Rectangle {
                x_min,
                y_min,
                width,
                height,
            } => {
                ensure!(
                    width >= 0.0 && height >= 0.0,
                    "rectangle with negative dimensions, width: {width}, height: {height}"
                );
                Ok(Rect::try_new(x_min, y_min, x_min + width, y_min + height)?.into())
            }
            ExtShape::Circle { center, radius } => {
                ensure!(
                    radius.is_finite() && radius >= 0.0,
                    "invalid circle radius: {radius}"
                );
                ensure!(
                    center.0.is_finite() && center.1.is_finite(),
                    "invalid circle center: {center:?}"
                );
                Ok(Circle::new(Vector::from(center), radius).into())
            }
        }
    }

    /// Builds a [`Scene`] with every item indexed in a fresh quadtree.
    /// Items outside the scene bounds are kept in the shape storage but are not indexed.
    pub fn import_scene(&self, ext_scene: &ExtScene) -> Result<Scene> {
        let bounds = self
            .import_rect(&ext_scene.bounds)
            .context("invalid scene bounds")?;

        let mut scene = Scene::new(bounds, self.qt_config);
        let mut seen_ids = HashSet::new();

        for ext_item in ext_scene.items.iter() {
            if !seen_ids.insert(ext_item.id) {
                bail!("duplicate item id: {}", ext_item.id);
            }
            let shape = self
                .import_shape(&ext_item.shape)
                .with_context(|| format!("invalid shape for item {}", ext_item.id))?;
            let (_, ekey) = scene.register_shape(ext_item.id, shape);
            match scene.entries[ekey].bounds.collides_with(&bounds) {
                true => scene.quadtree.insert(ekey, &scene.entries),
                false => warn!(
                    "[IMPORT] item {} lies outside the scene bounds, not indexed",
                    ext_item.id
                ),
            }
        }

        scene.queries = ext_scene
            .queries
            .iter()
            .enumerate()
            .map(|(i, q)| {
                self.import_rect(q)
                    .with_context(|| format!("invalid query region #{i}"))
            })
            .collect::<Result<Vec<_>>>()?;

        info!(
            "[IMPORT] scene imported: {} items, {} indexed, {} queries",
            scene.shapes.len(),
            scene.quadtree.n_entries(&scene.entries),
            scene.queries.len()
        );

        Ok(scene)
    }
}

/// Owner of a set of shapes, their spatial entries and the quadtree indexing them.
#[derive(Clone, Debug)]
pub struct Scene {
    pub shapes: SlotMap<ShapeKey, GeoShape>,
    pub entries: EntryMap,
    /// External identifier of every shape
    pub ids: SecondaryMap<ShapeKey, u64>,
    pub quadtree: QuadTree,
    /// Regions to be queried
    pub queries: Vec<Rect>,
}

impl Scene {
    pub fn new(bounds: Rect, qt_config: QTConfig) -> Self {
        Scene {
            shapes: SlotMap::with_key(),
            entries: EntryMap::with_key(),
            ids: SecondaryMap::new(),
            quadtree: QuadTree::new(bounds, qt_config),
            queries: vec![],
        }
    }

    /// Stores the shape, wraps it in an entry and registers the entry in the quadtree.
    pub fn add_shape(&mut self, id: u64, shape: GeoShape) -> (ShapeKey, EntryKey) {
        let (skey, ekey) = self.register_shape(id, shape);
        self.quadtree.insert(ekey, &self.entries);
        (skey, ekey)
    }

    /// Stores the shape and its entry without indexing it
    fn register_shape(&mut self, id: u64, shape: GeoShape) -> (ShapeKey, EntryKey) {
        let skey = self.shapes.insert(shape);
        self.ids.insert(skey, id);
        let ekey = self.entries.insert(SpatialEntry::from_shape(skey, &shape));
        (skey, ekey)
    }

    /// Removes the shape from the quadtree and from the scene's storage
    pub fn remove_shape(&mut self, ekey: EntryKey) -> Option<GeoShape> {
        self.quadtree.remove(ekey, &self.entries);
        let entry = self.entries.remove(ekey)?;
        self.ids.remove(entry.shape);
        self.shapes.remove(entry.shape)
    }

    /// External identifier of the shape behind an entry, `None` once the entry is removed
    pub fn entry_id(&self, ekey: EntryKey) -> Option<u64> {
        let entry = self.entries.get(ekey)?;
        self.ids.get(entry.shape).copied()
    }
}
