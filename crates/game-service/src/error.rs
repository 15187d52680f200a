//! 游戏服务错误类型定义

use thiserror::Error;

use crate::models::Category;

/// 游戏服务错误类型
///
/// Display 文本会出现在 JSON 接口的 `Error` 字段中，保持面向用户可读
#[derive(Debug, Error)]
pub enum GameError {
    #[error("no {category} with id {id}")]
    NotFound { category: Category, id: i64 },

    #[error("no {0} values available")]
    EmptyTable(Category),

    #[error("invalid link: {0}")]
    InvalidLink(String),

    #[error("{category} id {id} does not fit in a link")]
    IdOutOfRange { category: Category, id: i64 },

    #[error("store error: {0}")]
    Store(#[from] sqlx::Error),
}

/// 服务层 Result 类型别名
pub type Result<T> = std::result::Result<T, GameError>;

impl GameError {
    /// 获取错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } | Self::EmptyTable(_) => "NOT_FOUND",
            Self::InvalidLink(_) => "INVALID_LINK",
            Self::IdOutOfRange { .. } => "ID_OUT_OF_RANGE",
            Self::Store(_) => "STORE_ERROR",
        }
    }

    /// 空表与 id 不存在都归为"未找到"
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::EmptyTable(_))
    }

    /// 是否由调用方输入导致（而非存储故障）
    pub fn is_client_error(&self) -> bool {
        self.is_not_found() || matches!(self, Self::InvalidLink(_))
    }
}
