//! 路由配置模块
//!
//! 定义所有 HTTP 端点的路由映射

use std::path::Path;

use axum::{Router, middleware, routing::get};
use indiegame_shared::observability::middleware as obs_middleware;
use tower_http::services::ServeDir;

use crate::{handlers, state::AppState};

/// 游戏页面与 JSON 接口
pub fn game_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::game::index))
        .route("/l/{link}", get(handlers::game::linked_game))
        .route("/api/game/", get(handlers::game::random_game_json))
        .route("/api/game/{link}", get(handlers::game::linked_game_json))
}

/// 分类值录入后台
pub fn admin_routes() -> Router<AppState> {
    Router::new().route(
        "/admin",
        get(handlers::admin::admin_form).post(handlers::admin::submit_admin_form),
    )
}

/// 常见问题页和探针
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/faq", get(handlers::pages::faq))
        .route("/health", get(handlers::pages::health_check))
        .route("/ready", get(handlers::pages::readiness_check))
}

/// 构建完整应用
///
/// 未匹配的路径交给静态文件目录处理
pub fn app(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .merge(game_routes())
        .merge(admin_routes())
        .merge(page_routes())
        .route_layer(middleware::from_fn(obs_middleware::http_tracing))
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(obs_middleware::request_id))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_construction() {
        let _game = game_routes();
        let _admin = admin_routes();
        let _pages = page_routes();
    }
}
