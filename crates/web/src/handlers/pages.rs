//! 静态页面与探针处理器

use axum::{Json, extract::State, http::StatusCode, response::Html};
use indiegame_shared::SERVICE_NAME;
use serde_json::{Value, json};

use crate::{
    error::HtmlError,
    state::AppState,
    templates::{Page, TemplateContext},
};

/// 常见问题页
///
/// GET /faq
pub async fn faq(State(state): State<AppState>) -> Result<Html<String>, HtmlError> {
    let html = state
        .templates
        .render(Page::Faq, &TemplateContext::new().with("title", "FAQ"))?;
    Ok(Html(html))
}

/// 存活探针：服务进程正常即返回 ok
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": SERVICE_NAME
    }))
}

/// 就绪探针：检查数据库连接是否可用
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let db_ok = state.db.health_check().await.is_ok();
    let status = if db_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(json!({
            "status": if db_ok { "ok" } else { "degraded" },
            "service": SERVICE_NAME,
            "checks": {
                "database": if db_ok { "ok" } else { "fail" }
            }
        })),
    )
}
