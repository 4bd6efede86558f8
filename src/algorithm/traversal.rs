//! 图遍历算法
//!
//! 广度优先与深度优先遍历，对每个可达顶点恰好调用一次访问回调

use crate::error::{Error, Result};
use crate::graph::Graph;
use std::collections::{HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;
use tracing::{debug, trace, warn};

/// 遍历顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    /// 广度优先
    BreadthFirst,
    /// 深度优先
    DepthFirst,
}

/// 遍历器
///
/// 借用图的共享引用，遍历过程中不修改邻接关系。
/// 同层（或同一顶点的）邻居按其插入顺序展开，因此对固定的修改序列结果是确定的。
pub struct Traverser<'g, V> {
    graph: &'g Graph<V>,
}

impl<'g, V> Traverser<'g, V>
where
    V: Eq + Hash + Clone + Debug,
{
    /// 创建遍历器
    pub fn new(graph: &'g Graph<V>) -> Self {
        Self { graph }
    }

    /// 广度优先遍历
    ///
    /// 顶点在入队时标记为已访问，每个顶点最多入队一次。
    pub fn bfs<F>(&self, root: &V, mut visit: F) -> Result<()>
    where
        F: FnMut(&V),
    {
        self.try_bfs(root, |vertex| {
            visit(vertex);
            Ok::<(), Error>(())
        })
    }

    /// 深度优先遍历（迭代实现）
    pub fn dfs<F>(&self, root: &V, mut visit: F) -> Result<()>
    where
        F: FnMut(&V),
    {
        self.try_dfs(root, |vertex| {
            visit(vertex);
            Ok::<(), Error>(())
        })
    }

    /// 按指定顺序遍历
    pub fn traverse<F>(&self, order: TraversalOrder, root: &V, visit: F) -> Result<()>
    where
        F: FnMut(&V),
    {
        match order {
            TraversalOrder::BreadthFirst => self.bfs(root, visit),
            TraversalOrder::DepthFirst => self.dfs(root, visit),
        }
    }

    /// 可失败的广度优先遍历
    ///
    /// 回调返回 `Err` 时立即停止，不再调用后续回调，并原样返回该错误。
    pub fn try_bfs<E, F>(&self, root: &V, mut visit: F) -> std::result::Result<(), E>
    where
        E: From<Error>,
        F: FnMut(&V) -> std::result::Result<(), E>,
    {
        let root = self.resolve_root(root)?;
        debug!(?root, "开始广度优先遍历");

        let mut visited: HashSet<&'g V> = HashSet::new();
        let mut queue: VecDeque<&'g V> = VecDeque::new();
        visited.insert(root);
        queue.push_back(root);

        while let Some(current) = queue.pop_front() {
            trace!(vertex = ?current, "访问顶点");
            visit(current)?;

            for neighbor in self.graph.neighbor_iter(current).into_iter().flatten() {
                if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        debug!(visited = visited.len(), "广度优先遍历完成");
        Ok(())
    }

    /// 可失败的深度优先遍历
    ///
    /// 同一顶点可能多次入栈，出栈时跳过已访问的顶点。
    /// 邻居逆序入栈，使先插入的邻居先被访问。
    pub fn try_dfs<E, F>(&self, root: &V, mut visit: F) -> std::result::Result<(), E>
    where
        E: From<Error>,
        F: FnMut(&V) -> std::result::Result<(), E>,
    {
        let root = self.resolve_root(root)?;
        debug!(?root, "开始深度优先遍历");

        let mut visited: HashSet<&'g V> = HashSet::new();
        let mut stack: Vec<&'g V> = vec![root];

        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }

            trace!(vertex = ?current, "访问顶点");
            visit(current)?;

            for neighbor in self.graph.neighbor_iter(current).into_iter().flatten().rev() {
                if !visited.contains(neighbor) {
                    stack.push(neighbor);
                }
            }
        }

        debug!(visited = visited.len(), "深度优先遍历完成");
        Ok(())
    }

    /// 可失败的按序遍历
    pub fn try_traverse<E, F>(
        &self,
        order: TraversalOrder,
        root: &V,
        visit: F,
    ) -> std::result::Result<(), E>
    where
        E: From<Error>,
        F: FnMut(&V) -> std::result::Result<(), E>,
    {
        match order {
            TraversalOrder::BreadthFirst => self.try_bfs(root, visit),
            TraversalOrder::DepthFirst => self.try_dfs(root, visit),
        }
    }

    fn resolve_root(&self, root: &V) -> Result<&'g V> {
        self.graph.resolve(root).ok_or_else(|| {
            warn!(?root, "遍历起点不存在");
            Error::unknown_vertex(root)
        })
    }
}
