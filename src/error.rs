//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// 操作要求顶点存在，但图中没有该顶点
    #[error("顶点不存在: {0}")]
    UnknownVertex(String),
}

impl Error {
    /// 由顶点键构造 `UnknownVertex`
    pub fn unknown_vertex<V: std::fmt::Debug>(vertex: &V) -> Self {
        Error::UnknownVertex(format!("{:?}", vertex))
    }
}
