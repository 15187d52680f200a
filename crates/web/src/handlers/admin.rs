//! 分类值录入后台处理器

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use indiegame::{Category, LookupStore};
use tracing::{error, info, warn};
use validator::Validate;

use crate::{
    dto::AdminForm,
    error::HtmlError,
    state::AppState,
    templates::{Page, TemplateContext},
};

/// 录入失败时展示的提示，具体原因只记录日志
pub const INGEST_FAILED_MESSAGE: &str = "error adding values";

/// 录入表单
///
/// GET /admin
pub async fn admin_form(State(state): State<AppState>) -> Result<Html<String>, HtmlError> {
    render_admin(&state, "").await
}

/// 提交录入表单
///
/// POST /admin
pub async fn submit_admin_form(
    State(state): State<AppState>,
    Form(form): Form<AdminForm>,
) -> Result<Response, HtmlError> {
    if let Err(e) = form.validate() {
        warn!(error = %e, "Admin form rejected");
        let page = render_admin(&state, &e.to_string()).await?;
        return Ok((StatusCode::BAD_REQUEST, page).into_response());
    }

    match state
        .ingest
        .add_category_values(&form.genre, &form.emotion, &form.fantasy)
        .await
    {
        Ok(report) => {
            info!(total = report.total(), "Admin form processed");
            Ok(render_admin(&state, &report.to_string()).await?.into_response())
        }
        Err(e) => {
            error!(code = e.code(), error = %e, "Admin ingest failed");
            let page = render_admin(&state, INGEST_FAILED_MESSAGE).await?;
            Ok((StatusCode::INTERNAL_SERVER_ERROR, page).into_response())
        }
    }
}

async fn render_admin(state: &AppState, status: &str) -> Result<Html<String>, HtmlError> {
    let mut context = TemplateContext::new()
        .with("title", "Admin")
        .with("status", status);

    // 行数只做展示，读取失败时不影响表单可用
    for category in Category::ALL {
        let count = match state.store.count(category).await {
            Ok(count) => count.to_string(),
            Err(e) => {
                warn!(category = %category, error = %e, "Failed to count category values");
                "?".to_string()
            }
        };
        context.set(format!("{}_count", category.table_name()), count);
    }

    let html = state.templates.render(Page::Admin, &context)?;
    Ok(Html(html))
}
