mod circle;
mod rect;
mod vector;

#[doc(inline)]
pub use circle::Circle;
#[doc(inline)]
pub use rect::Rect;
#[doc(inline)]
pub use vector::Vector;
