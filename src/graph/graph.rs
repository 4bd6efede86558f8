//! 图数据结构
//!
//! 基于邻接集合的泛型无向图

use super::index::AdjacencyIndex;
use crate::algorithm::{TraversalOrder, Traverser};
use crate::error::{Error, Result};
use std::fmt::Debug;
use std::hash::Hash;
use tracing::{debug, warn};

/// 无向图
///
/// 顶点以值的形式存储，任何实现 `Eq + Hash + Clone + Debug` 的类型都可作为顶点键。
/// 边没有方向和权重，同一对顶点之间最多一条边。
///
/// 遍历期间图以共享引用借出，访问回调无法修改正在遍历的图。
#[derive(Debug, Clone)]
pub struct Graph<V> {
    /// 邻接索引
    index: AdjacencyIndex<V>,
}

impl<V> Graph<V>
where
    V: Eq + Hash + Clone + Debug,
{
    /// 创建空图
    pub fn new() -> Self {
        Self {
            index: AdjacencyIndex::new(),
        }
    }

    /// 创建预留顶点容量的空图
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: AdjacencyIndex::with_capacity(capacity),
        }
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点
    ///
    /// 顶点已存在时不做任何修改，已有的边保持不变。
    pub fn add_vertex(&mut self, vertex: V) {
        if self.index.insert_vertex(vertex.clone()) {
            debug!(?vertex, "添加顶点");
        }
    }

    /// 删除顶点，同时从所有邻居的邻接集合中移除该顶点
    ///
    /// 顶点不存在时为空操作。
    pub fn remove_vertex(&mut self, vertex: &V) {
        if self.index.remove_vertex(vertex) {
            debug!(?vertex, "删除顶点");
        }
    }

    /// 顶点是否存在
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.index.contains_vertex(vertex)
    }

    /// 获取图的阶（顶点数量）
    pub fn order(&self) -> usize {
        self.index.vertex_count()
    }

    pub fn is_empty(&self) -> bool {
        self.order() == 0
    }

    /// 按插入顺序遍历顶点
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.index.vertices()
    }

    /// 删除所有顶点和边
    pub fn clear(&mut self) {
        self.index.clear();
    }

    // ==================== 边操作 ====================

    /// 添加无向边
    ///
    /// 端点不存在时自动创建。重复添加同一条边不改变图。
    pub fn add_edge(&mut self, a: V, b: V) {
        if self.index.insert_edge(a.clone(), b.clone()) {
            debug!(?a, ?b, "添加边");
        }
    }

    /// 删除无向边
    ///
    /// 边或任一端点不存在时为空操作。
    pub fn remove_edge(&mut self, a: &V, b: &V) {
        if self.index.remove_edge(a, b) {
            debug!(?a, ?b, "删除边");
        }
    }

    /// 两个顶点是否相邻
    ///
    /// 两侧邻接集合都包含对方才返回 `true`。任一端点不存在时返回 `UnknownVertex`。
    pub fn is_edge(&self, a: &V, b: &V) -> Result<bool> {
        let a_neighbors = self.index.neighbors(a).ok_or_else(|| unknown(a))?;
        let b_neighbors = self.index.neighbors(b).ok_or_else(|| unknown(b))?;
        Ok(a_neighbors.contains(b) && b_neighbors.contains(a))
    }

    /// 获取边数量（自环计一次）
    pub fn size(&self) -> usize {
        self.index.edge_count()
    }

    /// 每条无向边恰好出现一次，端点按顶点插入顺序排列
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        self.index
            .iter()
            .enumerate()
            .flat_map(move |(position, (a, neighbors))| {
                neighbors
                    .iter()
                    .filter(move |b| {
                        self.index
                            .position(b)
                            .is_some_and(|other| other >= position)
                    })
                    .map(move |b| (a, b))
            })
    }

    // ==================== 邻居查询 ====================

    /// 获取顶点的邻居
    pub fn neighbors(&self, vertex: &V) -> Result<Vec<V>> {
        let set = self.index.neighbors(vertex).ok_or_else(|| unknown(vertex))?;
        Ok(set.iter().cloned().collect())
    }

    /// 获取顶点的度（自环计一次）
    pub fn degree(&self, vertex: &V) -> Result<usize> {
        self.index
            .neighbors(vertex)
            .map(|set| set.len())
            .ok_or_else(|| unknown(vertex))
    }

    /// 按插入顺序遍历邻居，供遍历算法使用
    pub(crate) fn neighbor_iter(&self, vertex: &V) -> Option<indexmap::set::Iter<'_, V>> {
        self.index.neighbors(vertex).map(|set| set.iter())
    }

    /// 获取图内存储的顶点键
    pub(crate) fn resolve(&self, vertex: &V) -> Option<&V> {
        self.index.get_key(vertex)
    }

    // ==================== 遍历 ====================

    /// 获取遍历器
    pub fn traverser(&self) -> Traverser<'_, V> {
        Traverser::new(self)
    }

    /// 广度优先遍历从 `root` 可达的所有顶点
    pub fn bfs<F>(&self, root: &V, visit: F) -> Result<()>
    where
        F: FnMut(&V),
    {
        self.traverser().bfs(root, visit)
    }

    /// 深度优先遍历从 `root` 可达的所有顶点
    pub fn dfs<F>(&self, root: &V, visit: F) -> Result<()>
    where
        F: FnMut(&V),
    {
        self.traverser().dfs(root, visit)
    }

    /// 按指定顺序遍历
    pub fn traverse<F>(&self, order: TraversalOrder, root: &V, visit: F) -> Result<()>
    where
        F: FnMut(&V),
    {
        self.traverser().traverse(order, root, visit)
    }
}

fn unknown<V: Debug>(vertex: &V) -> Error {
    warn!(?vertex, "顶点不存在");
    Error::unknown_vertex(vertex)
}

impl<V> Default for Graph<V>
where
    V: Eq + Hash + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Extend<(V, V)> for Graph<V>
where
    V: Eq + Hash + Clone + Debug,
{
    fn extend<I: IntoIterator<Item = (V, V)>>(&mut self, edges: I) {
        for (a, b) in edges {
            self.add_edge(a, b);
        }
    }
}

impl<V> FromIterator<(V, V)> for Graph<V>
where
    V: Eq + Hash + Clone + Debug,
{
    fn from_iter<I: IntoIterator<Item = (V, V)>>(edges: I) -> Self {
        let mut graph = Self::new();
        graph.extend(edges);
        graph
    }
}
