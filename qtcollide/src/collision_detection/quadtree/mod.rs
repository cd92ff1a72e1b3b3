mod qt_entry;
mod qt_node;
mod qt_tree;

#[doc(inline)]
pub use qt_entry::EntryKey;
#[doc(inline)]
pub use qt_entry::EntryMap;
#[doc(inline)]
pub use qt_entry::SpatialEntry;
#[doc(inline)]
pub use qt_node::QTNode;
#[doc(inline)]
pub use qt_tree::QuadTree;
