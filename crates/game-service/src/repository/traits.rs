//! 仓储 Trait 定义
//!
//! 服务层依赖抽象而非具体实现，支持 mock 测试

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Category, CategoryValue};

/// 分类查找存储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LookupStore: Send + Sync {
    /// 在可编码进链接的行（id 0..=255）中均匀随机抽取一行
    ///
    /// 没有这样的行时返回 `EmptyTable`
    async fn random_value(&self, category: Category) -> Result<CategoryValue>;

    /// 按 id 查询值；不存在返回 `NotFound`
    async fn value_by_id(&self, category: Category, id: i64) -> Result<String>;

    /// 逐行写入非空值，返回写入行数
    ///
    /// 不去重、不回滚：遇到第一个写入错误即返回，之前的写入保留。
    /// 实现负责按实际提交的行数记录 `category_values_inserted_total`。
    async fn insert_values(&self, category: Category, values: &[String]) -> Result<usize>;

    /// 表中行数
    async fn count(&self, category: Category) -> Result<i64>;
}
