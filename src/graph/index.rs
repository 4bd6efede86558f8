//! 邻接索引
//!
//! 顶点键到邻居集合的内存映射，维护无向图的对称性

use indexmap::{IndexMap, IndexSet};
use std::hash::Hash;

/// 对称邻接索引
///
/// `v` 在 `u` 的邻居集合中当且仅当 `u` 在 `v` 的邻居集合中。
/// 所有写操作都成对更新两侧集合。顶点与邻居均保持插入顺序，
/// 删除时使用 `shift_remove`，剩余元素的相对顺序不变。
#[derive(Debug, Clone)]
pub struct AdjacencyIndex<V> {
    /// 顶点到邻居集合的映射
    adjacency: IndexMap<V, IndexSet<V>>,
}

impl<V> AdjacencyIndex<V>
where
    V: Eq + Hash + Clone,
{
    /// 创建新索引
    pub fn new() -> Self {
        Self {
            adjacency: IndexMap::new(),
        }
    }

    /// 创建预留容量的索引
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            adjacency: IndexMap::with_capacity(capacity),
        }
    }

    /// 插入孤立顶点，已存在时不变。返回是否新建
    pub fn insert_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, IndexSet::new());
        true
    }

    /// 删除顶点及所有指向它的邻接记录。返回是否存在
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        let Some(neighbors) = self.adjacency.shift_remove(vertex) else {
            return false;
        };

        for neighbor in &neighbors {
            if let Some(set) = self.adjacency.get_mut(neighbor) {
                set.shift_remove(vertex);
            }
        }

        true
    }

    /// 插入无向边，缺失的端点会被自动创建。返回边是否为新边
    pub fn insert_edge(&mut self, a: V, b: V) -> bool {
        let inserted = self
            .adjacency
            .entry(a.clone())
            .or_default()
            .insert(b.clone());
        self.adjacency.entry(b).or_default().insert(a);
        inserted
    }

    /// 删除无向边。任一端点缺失时不做修改，返回边是否存在
    pub fn remove_edge(&mut self, a: &V, b: &V) -> bool {
        if !self.contains_vertex(a) || !self.contains_vertex(b) {
            return false;
        }

        let mut removed = false;
        if let Some(set) = self.adjacency.get_mut(a) {
            removed |= set.shift_remove(b);
        }
        if let Some(set) = self.adjacency.get_mut(b) {
            removed |= set.shift_remove(a);
        }
        removed
    }

    /// 顶点是否存在
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// 获取索引中存储的顶点键
    pub fn get_key(&self, vertex: &V) -> Option<&V> {
        self.adjacency.get_key_value(vertex).map(|(key, _)| key)
    }

    /// 获取顶点的邻居集合
    pub fn neighbors(&self, vertex: &V) -> Option<&IndexSet<V>> {
        self.adjacency.get(vertex)
    }

    /// 顶点在插入顺序中的位置
    pub fn position(&self, vertex: &V) -> Option<usize> {
        self.adjacency.get_index_of(vertex)
    }

    /// 按插入顺序遍历顶点
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.adjacency.keys()
    }

    /// 按插入顺序遍历 (顶点, 邻居集合)
    pub fn iter(&self) -> impl Iterator<Item = (&V, &IndexSet<V>)> + '_ {
        self.adjacency.iter()
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// 获取无向边数量（自环计一次）
    pub fn edge_count(&self) -> usize {
        let mut endpoints = 0;
        let mut loops = 0;
        for (vertex, set) in &self.adjacency {
            endpoints += set.len();
            if set.contains(vertex) {
                loops += 1;
            }
        }
        (endpoints - loops) / 2 + loops
    }

    /// 清空索引
    pub fn clear(&mut self) {
        self.adjacency.clear();
    }
}

impl<V> Default for AdjacencyIndex<V>
where
    V: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbor_vec(index: &AdjacencyIndex<u32>, v: u32) -> Vec<u32> {
        index.neighbors(&v).unwrap().iter().copied().collect()
    }

    #[test]
    fn test_insert_edge_is_symmetric() {
        let mut index = AdjacencyIndex::new();

        assert!(index.insert_edge(1, 2));
        assert!(!index.insert_edge(2, 1));

        assert_eq!(index.vertex_count(), 2);
        assert_eq!(neighbor_vec(&index, 1), vec![2]);
        assert_eq!(neighbor_vec(&index, 2), vec![1]);
        assert_eq!(index.edge_count(), 1);
    }

    #[test]
    fn test_insert_vertex_keeps_edges() {
        let mut index = AdjacencyIndex::new();
        index.insert_edge(1, 2);

        assert!(!index.insert_vertex(1));
        assert_eq!(neighbor_vec(&index, 1), vec![2]);

        assert!(index.insert_vertex(3));
        assert!(index.neighbors(&3).unwrap().is_empty());
    }

    #[test]
    fn test_remove_vertex_cascades() {
        let mut index = AdjacencyIndex::new();
        index.insert_edge(1, 2);
        index.insert_edge(1, 3);
        index.insert_edge(2, 3);

        assert!(index.remove_vertex(&1));
        assert!(!index.remove_vertex(&1));

        assert_eq!(index.vertex_count(), 2);
        assert_eq!(neighbor_vec(&index, 2), vec![3]);
        assert_eq!(neighbor_vec(&index, 3), vec![2]);
    }

    #[test]
    fn test_remove_edge_missing_endpoint() {
        let mut index = AdjacencyIndex::new();
        index.insert_edge(1, 2);

        assert!(!index.remove_edge(&1, &9));
        assert!(!index.contains_vertex(&9));
        assert!(index.remove_edge(&2, &1));
        assert!(!index.remove_edge(&2, &1));
        assert_eq!(index.edge_count(), 0);
        assert_eq!(index.vertex_count(), 2);
    }

    #[test]
    fn test_self_loop_counts_once() {
        let mut index = AdjacencyIndex::new();
        index.insert_edge(1, 1);
        index.insert_edge(1, 2);

        assert_eq!(index.edge_count(), 2);
        assert_eq!(neighbor_vec(&index, 1), vec![1, 2]);

        assert!(index.remove_vertex(&1));
        assert!(index.neighbors(&2).unwrap().is_empty());
    }

    #[test]
    fn test_removal_preserves_order() {
        let mut index = AdjacencyIndex::new();
        for v in [2, 3, 4, 5] {
            index.insert_edge(1, v);
        }

        index.remove_edge(&1, &3);
        assert_eq!(neighbor_vec(&index, 1), vec![2, 4, 5]);

        index.remove_vertex(&2);
        let order: Vec<u32> = index.vertices().copied().collect();
        assert_eq!(order, vec![1, 3, 4, 5]);
    }
}
