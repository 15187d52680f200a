//! 独立游戏标题生成服务
//!
//! 从 genre / emotion / fantasy 三张查找表中各抽取一行，组合成一个"游戏"，
//! 并提供可复现组合的十六进制链接编码。
//!
//! ## 核心功能
//!
//! - **查找存储**：按分类随机抽取、按 id 查询、批量写入分类值
//! - **链接编解码**：三个单字节 id 与 6 位十六进制串互转
//! - **游戏组合**：随机组合或根据链接还原组合
//! - **后台录入**：按行拆分文本并写入对应分类表
//!
//! ## 模块结构
//!
//! - `models`: 领域模型定义
//! - `error`: 错误类型定义
//! - `link`: 链接编解码
//! - `repository`: 数据库仓储层
//! - `service`: 业务服务层

pub mod error;
pub mod link;
pub mod models;
pub mod repository;
pub mod service;

pub use error::{GameError, Result};
pub use link::{LinkIds, decode, encode};
pub use models::{Category, CategoryValue, Game};
pub use repository::{LookupStore, SqliteLookupStore};
pub use service::{AdminIngest, GameComposer, IngestReport};
