//! 应用状态定义
//!
//! 包含 Axum 路由共享的应用状态

use std::sync::Arc;

use indiegame::{AdminIngest, GameComposer, SqliteLookupStore};
use indiegame_shared::Database;

use crate::templates::TemplateEngine;

/// Axum 应用共享状态
///
/// 存储句柄显式注入各服务，通过 Arc 在 handler 间共享
#[derive(Clone)]
pub struct AppState {
    /// SQLite 连接池
    pub db: Database,
    /// 分类查找仓储
    pub store: Arc<SqliteLookupStore>,
    pub composer: GameComposer<SqliteLookupStore>,
    pub ingest: AdminIngest<SqliteLookupStore>,
    pub templates: Arc<TemplateEngine>,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(db: Database, templates: Arc<TemplateEngine>) -> Self {
        let store = Arc::new(SqliteLookupStore::new(db.pool().clone()));
        Self {
            db,
            composer: GameComposer::new(store.clone()),
            ingest: AdminIngest::new(store.clone()),
            store,
            templates,
        }
    }
}
