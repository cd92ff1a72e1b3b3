use slotmap::SlotMap;
use svg::Document;
use svg::node::element::{Group, Text, Title};

use crate::collision_detection::QuadTree;
use crate::collision_detection::quadtree::EntryMap;
use crate::geometry::geo_traits::{CollidesWith, Shape};
use crate::geometry::{GeoShape, ShapeKey};
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::{ShapeElement, SvgDrawOptions};

/// Draws the world region of the quadtree, every entry's shape and (optionally) the leaves and collisions.
pub fn quadtree_to_svg(
    qt: &QuadTree,
    shapes: &SlotMap<ShapeKey, GeoShape>,
    entries: &EntryMap,
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let bbox = qt.bbox();
    let theme = &options.theme;

    let stroke_width =
        f32::min(bbox.width(), bbox.height()) * 0.001 * theme.stroke_width_multiplier;

    let label = {
        let label_content = format!(
            "width: {:.3} | height: {:.3} | entries: {} | nodes: {} | {}",
            bbox.width(),
            bbox.height(),
            qt.n_entries(entries),
            qt.root().n_nodes(),
            title,
        );
        Text::new(label_content)
            .set("x", bbox.x_min)
            .set(
                "y",
                bbox.y_min - 0.5 * 0.025 * f32::min(bbox.width(), bbox.height()),
            )
            .set("font-size", f32::min(bbox.width(), bbox.height()) * 0.025)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let world_group = Group::new().set("id", "world").add(
        svg_util::data_to_path(
            svg_util::aa_rect_data(&bbox),
            &[
                ("fill", &*format!("{}", theme.background_fill)),
                ("stroke", "black"),
                ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
            ],
        )
        .add(Title::new("world")),
    );

    let shapes_group = {
        let shape_stroke = svg_util::change_brightness(theme.shape_fill, 0.5);
        let style = [
            ("fill", &*format!("{}", theme.shape_fill)),
            ("fill-opacity", "0.5"),
            ("stroke", &*format!("{}", shape_stroke)),
            ("stroke-width", &*format!("{}", stroke_width)),
        ];
        entries
            .iter()
            .filter_map(|(ekey, entry)| shapes.get(entry.shape).map(|s| (ekey, s)))
            .fold(Group::new().set("id", "shapes"), |group, (ekey, shape)| {
                let title = Title::new(format!("entry {ekey:?}"));
                match svg_util::shape_element(shape, &style) {
                    ShapeElement::Circle(c) => group.add(c.add(title)),
                    ShapeElement::Path(p) => group.add(p.add(title)),
                }
            })
    };

    //draw quadtree leaves (if enabled)
    let qt_group = match options.quadtree {
        false => None,
        true => Some(
            Group::new()
                .set("id", "quadtree")
                .add(svg_util::data_to_path(
                    svg_util::quad_tree_data(qt.root()),
                    &[
                        ("fill", "none"),
                        ("stroke", &*format!("{}", theme.qt_stroke)),
                        ("stroke-width", &*format!("{}", stroke_width * 0.25)),
                        ("stroke-opacity", "0.8"),
                    ],
                )),
        ),
    };

    //connect colliding shapes (if enabled)
    let collision_group = match options.highlight_collisions {
        false => None,
        true => {
            let color = format!("{}", theme.collision_highlight_color);
            let collision_group = qt
                .collision_pairs(entries)
                .into_iter()
                .filter_map(|(k1, k2)| {
                    let s1 = shapes.get(entries[k1].shape)?;
                    let s2 = shapes.get(entries[k2].shape)?;
                    s1.collides_with(s2).then_some((s1, s2))
                })
                .fold(
                    Group::new().set("id", "collision_lines"),
                    |group, (s1, s2)| {
                        group.add(svg_util::data_to_path(
                            svg_util::edge_data(s1.centroid(), s2.centroid()),
                            &[
                                ("stroke", &*color),
                                ("stroke-opacity", "0.75"),
                                ("stroke-width", &*format!("{}", stroke_width * 4.0)),
                                (
                                    "stroke-dasharray",
                                    &*format!("{} {}", 4.0 * stroke_width, 8.0 * stroke_width),
                                ),
                                ("stroke-linecap", "round"),
                            ],
                        ))
                    },
                );
            Some(collision_group)
        }
    };

    let vbox_svg = {
        let margin = 0.05 * f32::max(bbox.width(), bbox.height());
        (
            bbox.x_min - margin,
            bbox.y_min - margin,
            bbox.width() + 2.0 * margin,
            bbox.height() + 2.0 * margin,
        )
    };

    let optionals = [qt_group, collision_group]
        .into_iter()
        .flatten()
        .fold(Group::new().set("id", "optionals"), |g, opt| g.add(opt));

    Document::new()
        .set("viewBox", vbox_svg)
        .add(world_group)
        .add(shapes_group)
        .add(optionals)
        .add(label)
}
