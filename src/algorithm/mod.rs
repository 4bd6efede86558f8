//! 图算法模块
//!
//! 包含广度优先与深度优先遍历

mod traversal;

pub use traversal::{TraversalOrder, Traverser};
