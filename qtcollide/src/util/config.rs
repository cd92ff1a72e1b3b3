use serde::{Deserialize, Serialize};

///Configuration of the quadtree, shared by all of its nodes
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct QTConfig {
    ///Nodes are never split if their children would end up at this depth or deeper (the root is at depth 0)
    pub max_depth: u8,
    ///A leaf is split when inserting an entry would push it over this number of entries
    pub max_entries_per_leaf: usize,
}

impl Default for QTConfig {
    fn default() -> Self {
        Self {
            max_depth: 5,
            max_entries_per_leaf: 10,
        }
    }
}
