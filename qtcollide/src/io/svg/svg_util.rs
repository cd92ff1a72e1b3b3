use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{Result, ensure};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use svg::node::element::path::Data;
use svg::node::element::{Circle, Path};

use crate::collision_detection::quadtree::QTNode;
use crate::geometry::GeoShape;
use crate::geometry::primitives::{Rect, Vector};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgTheme,
    ///Draw the leaves of the quadtree on top
    #[serde(default)]
    pub quadtree: bool,
    ///Draw dashed lines between colliding shapes
    #[serde(default)]
    pub highlight_collisions: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgTheme::default(),
            quadtree: true,
            highlight_collisions: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgTheme {
    pub stroke_width_multiplier: f32,
    pub background_fill: Color,
    pub shape_fill: Color,
    pub qt_stroke: Color,
    pub collision_highlight_color: Color,
}

impl Default for SvgTheme {
    fn default() -> Self {
        SvgTheme::EARTH_TONES
    }
}

impl SvgTheme {
    pub const EARTH_TONES: SvgTheme = SvgTheme {
        stroke_width_multiplier: 2.0,
        background_fill: Color(0xCC, 0x82, 0x4A),
        shape_fill: Color(0xFF, 0xC8, 0x79),
        qt_stroke: Color(0x2D, 0x2D, 0x2D),
        collision_highlight_color: Color(0x00, 0xFF, 0x00), // LIME
    };
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    /// Parses `#RRGGBB` (the `#` is optional)
    fn from_str(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        ensure!(
            hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()),
            "invalid color: {s}, expected #RRGGBB"
        );
        let r = u8::from_str_radix(&hex[0..2], 16)?;
        let g = u8::from_str_radix(&hex[2..4], 16)?;
        let b = u8::from_str_radix(&hex[4..6], 16)?;
        Ok(Color(r, g, b))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_str(&s).map_err(serde::de::Error::custom)
    }
}

pub fn change_brightness(color: Color, fraction: f32) -> Color {
    let Color(r, g, b) = color;

    let r = (r as f32 * fraction) as u8;
    let g = (g as f32 * fraction) as u8;
    let b = (b as f32 * fraction) as u8;
    Color(r, g, b)
}

/// Outlines of all the leaves of the (sub)tree
pub fn quad_tree_data(qt_root: &QTNode) -> Data {
    qt_root
        .leaves()
        .fold(Data::new(), |data, leaf| append_rect(data, &leaf.bbox))
}

pub fn aa_rect_data(rect: &Rect) -> Data {
    append_rect(Data::new(), rect)
}

fn append_rect(data: Data, rect: &Rect) -> Data {
    data.move_to((rect.x_min, rect.y_min))
        .line_to((rect.x_max, rect.y_min))
        .line_to((rect.x_max, rect.y_max))
        .line_to((rect.x_min, rect.y_max))
        .close()
}

pub fn edge_data(start: Vector, end: Vector) -> Data {
    Data::new()
        .move_to::<(f32, f32)>(start.into())
        .line_to::<(f32, f32)>(end.into())
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}

pub fn circle(circle: crate::geometry::primitives::Circle, params: &[(&str, &str)]) -> Circle {
    let mut circle = Circle::new()
        .set("cx", circle.center.0)
        .set("cy", circle.center.1)
        .set("r", circle.radius);
    for param in params {
        circle = circle.set(param.0, param.1)
    }
    circle
}

/// Either a `<circle>` or a `<path>` element, depending on the shape
pub enum ShapeElement {
    Circle(Circle),
    Path(Path),
}

pub fn shape_element(shape: &GeoShape, params: &[(&str, &str)]) -> ShapeElement {
    match shape {
        GeoShape::Rect(r) => ShapeElement::Path(data_to_path(aa_rect_data(r), params)),
        GeoShape::Circle(c) => ShapeElement::Circle(circle(*c, params)),
    }
}
