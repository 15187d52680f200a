//! 数据库仓储层
//!
//! 封装三张分类查找表的 SQL 操作。
//!
//! ## 设计原则
//!
//! - 仓储只负责数据持久化，不包含组合逻辑
//! - 不使用事务，依赖 SQLite 单语句原子性
//! - 定义 trait 接口以支持 mock 测试

mod lookup_repo;
mod traits;

pub use lookup_repo::SqliteLookupStore;
pub use traits::*;
