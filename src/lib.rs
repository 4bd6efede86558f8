//! adjgraph - 泛型内存无向图
//!
//! 以邻接集合存储的无向图容器，支持：
//! - 顶点与边的增删，删除顶点时级联清理邻接关系
//! - 邻接查询（`is_edge`、`neighbors`、`degree`）
//! - 以访问回调驱动的广度优先与深度优先遍历

pub mod algorithm;
pub mod error;
pub mod graph;

// 重导出常用类型
pub use algorithm::{TraversalOrder, Traverser};
pub use error::{Error, Result};
pub use graph::{AdjacencyIndex, Graph};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
