mod qt_to_svg;
pub mod svg_util;

pub use qt_to_svg::quadtree_to_svg;
pub use svg_util::{Color, SvgDrawOptions, SvgTheme};
