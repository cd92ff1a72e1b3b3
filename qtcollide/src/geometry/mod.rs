pub mod geo_traits;
pub mod primitives;

mod geo_shape;

#[doc(inline)]
pub use geo_shape::GeoShape;
#[doc(inline)]
pub use geo_shape::ShapeKey;
