//! 游戏页面与 JSON 接口处理器

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    response::Html,
};
use indiegame::{Game, GameError};

use crate::{
    error::{ApiError, HtmlError},
    state::AppState,
    templates::{Page, TemplateContext},
};

/// 首页：随机游戏
///
/// GET /
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, HtmlError> {
    let game = state.composer.random_game().await?;
    render_game(&state, &game)
}

/// 通过链接还原游戏
///
/// GET /l/{link}
pub async fn linked_game(
    State(state): State<AppState>,
    link: Result<Path<String>, PathRejection>,
) -> Result<Html<String>, HtmlError> {
    let link = link_param(link)?;
    let game = state.composer.game_from_link(&link).await?;
    render_game(&state, &game)
}

/// 随机游戏 JSON
///
/// GET /api/game/
pub async fn random_game_json(State(state): State<AppState>) -> Result<Json<Game>, ApiError> {
    let game = state.composer.random_game().await?;
    Ok(Json(game))
}

/// 通过链接还原游戏 JSON
///
/// GET /api/game/{link}
pub async fn linked_game_json(
    State(state): State<AppState>,
    link: Result<Path<String>, PathRejection>,
) -> Result<Json<Game>, ApiError> {
    let link = link_param(link)?;
    let game = state.composer.game_from_link(&link).await?;
    Ok(Json(game))
}

/// 路径段无法解码（如非 UTF-8 的百分号编码）时按无效链接处理
fn link_param(link: Result<Path<String>, PathRejection>) -> Result<String, GameError> {
    link.map(|Path(link)| link)
        .map_err(|rejection| GameError::InvalidLink(rejection.body_text()))
}

fn render_game(state: &AppState, game: &Game) -> Result<Html<String>, HtmlError> {
    let html = state.templates.render(Page::Main, &game_context(game))?;
    Ok(Html(html))
}

/// 主页面模板变量
pub fn game_context(game: &Game) -> TemplateContext {
    TemplateContext::new()
        .with("title", game.title())
        .with("genre", game.genre.as_str())
        .with("emotion", game.emotion.as_str())
        .with("fantasy", game.fantasy.as_str())
        .with("link", game.link.as_str())
        .with("permalink", game.permalink())
}
