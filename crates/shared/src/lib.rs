//! 共享库
//!
//! 包含 web 服务与游戏服务共用的配置、错误处理、数据库连接和可观测性基础设施代码。

pub mod config;
pub mod database;
pub mod error;
pub mod observability;

pub use config::{AppConfig, DatabaseConfig, ObservabilityConfig, ServerConfig};
pub use database::Database;
pub use error::{Result, SharedError};

/// 服务名称，用于日志、指标标签和配置文件查找
pub const SERVICE_NAME: &str = "nextindiegame";
