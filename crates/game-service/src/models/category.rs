//! 分类定义
//!
//! 三张互相独立的查找表，表名固定，从不取自用户输入

use std::fmt;

use serde::{Deserialize, Serialize};

/// 查找表分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// 游戏类型，如 "roguelike"
    Genre,
    /// 情感主题，如 "loneliness"
    Emotion,
    /// 幻想场景，如 "space"
    Fantasy,
}

impl Category {
    /// 按链接中的编码顺序排列
    pub const ALL: [Category; 3] = [Category::Genre, Category::Emotion, Category::Fantasy];

    /// 对应的数据库表名
    pub fn table_name(self) -> &'static str {
        match self {
            Self::Genre => "genre",
            Self::Emotion => "emotion",
            Self::Fantasy => "fantasy",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

/// 分类表中的一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CategoryValue {
    pub id: i64,
    pub value: String,
}
