use serde::{Deserialize, Serialize};

/// External representation of a scene: a world region and the shapes in it.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtScene {
    /// Region covered by the quadtree
    pub bounds: ExtRect,
    /// The shapes to index
    pub items: Vec<ExtItem>,
    /// Regions to query once the scene is indexed
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub queries: Vec<ExtRect>,
}

/// A shape with a unique identifier
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtItem {
    /// Unique identifier of the item
    pub id: u64,
    /// Shape of the item
    pub shape: ExtShape,
}

/// Various ways to represent a shape
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(tag = "type", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum ExtShape {
    /// Axis-aligned rectangle. With its top-left corner at (x_min, y_min), a width and height
    Rectangle {
        x_min: f32,
        y_min: f32,
        width: f32,
        height: f32,
    },
    /// Circle defined by its center and radius
    Circle { center: (f32, f32), radius: f32 },
}

/// Axis-aligned rectangle given by its extreme coordinates
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtRect {
    pub x_min: f32,
    pub y_min: f32,
    pub x_max: f32,
    pub y_max: f32,
}

/// Results of running a scene's queries and its broad-phase
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtReport {
    /// Number of distinct items indexed in the quadtree
    pub n_indexed: usize,
    /// Number of nodes in the quadtree
    pub n_nodes: usize,
    /// One result per query, in the order of [`ExtScene::queries`]
    pub queries: Vec<ExtQueryResult>,
    /// Pairs of items whose bounding boxes overlap
    pub candidate_pairs: Vec<(u64, u64)>,
    /// Subset of `candidate_pairs` whose shapes actually collide
    pub colliding_pairs: Vec<(u64, u64)>,
}

/// Items hit by a single region query
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtQueryResult {
    pub area: ExtRect,
    /// Ids of the items whose bounding boxes overlap `area`, sorted ascending
    pub hits: Vec<u64>,
}
