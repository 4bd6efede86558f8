//! 图核心模块
//!
//! 定义邻接索引和无向图容器

mod graph;
mod index;

pub use graph::Graph;
pub use index::AdjacencyIndex;
