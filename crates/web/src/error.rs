//! 网站错误类型定义
//!
//! HTML 页面统一展示通用错误提示；JSON 接口返回 `{"Error": ...}`。

use axum::Json;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use indiegame::GameError;

use crate::dto::ErrorBody;
use crate::templates::TemplateError;

/// 页面和 JSON 接口出错时的通用提示
pub const GENERIC_ERROR_MESSAGE: &str = "error getting game data";

/// 网站错误类型
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error(transparent)]
    Template(#[from] TemplateError),
}

impl WebError {
    /// 返回对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Game(e) if e.is_client_error() => StatusCode::NOT_FOUND,
            Self::Game(_) | Self::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 返回错误码
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Game(e) => e.code(),
            Self::Template(_) => "TEMPLATE_ERROR",
        }
    }

    /// 对外消息：客户端错误给出具体原因，服务端错误只返回通用提示
    pub fn public_message(&self) -> String {
        if self.status_code().is_server_error() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }

    fn log(&self) {
        if self.status_code().is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "Request failed");
        } else {
            tracing::info!(code = self.error_code(), error = %self, "Request rejected");
        }
    }
}

/// HTML 页面错误响应
#[derive(Debug)]
pub struct HtmlError(pub WebError);

impl IntoResponse for HtmlError {
    fn into_response(self) -> Response {
        self.0.log();
        (self.0.status_code(), Html(GENERIC_ERROR_MESSAGE)).into_response()
    }
}

impl From<WebError> for HtmlError {
    fn from(err: WebError) -> Self {
        Self(err)
    }
}

impl From<GameError> for HtmlError {
    fn from(err: GameError) -> Self {
        Self(err.into())
    }
}

impl From<TemplateError> for HtmlError {
    fn from(err: TemplateError) -> Self {
        Self(err.into())
    }
}

/// JSON 接口错误响应
#[derive(Debug)]
pub struct ApiError(pub WebError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.0.log();
        let body = ErrorBody {
            error: self.0.public_message(),
        };
        (self.0.status_code(), Json(body)).into_response()
    }
}

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indiegame::Category;

    #[test]
    fn test_status_mapping() {
        let not_found = WebError::from(GameError::NotFound {
            category: Category::Genre,
            id: 3,
        });
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.public_message(), "no genre with id 3");

        let invalid = WebError::from(GameError::InvalidLink("bad".into()));
        assert_eq!(invalid.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(invalid.error_code(), "INVALID_LINK");

        let store = WebError::from(GameError::Store(sqlx::Error::PoolTimedOut));
        assert_eq!(store.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(store.public_message(), GENERIC_ERROR_MESSAGE);

        let template = WebError::from(TemplateError::MissingSlot);
        assert_eq!(template.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(template.error_code(), "TEMPLATE_ERROR");
    }

    #[test]
    fn test_html_error_response() {
        let response = HtmlError::from(GameError::EmptyTable(Category::Fantasy)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_api_error_response() {
        let response = ApiError::from(GameError::Store(sqlx::Error::PoolClosed)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
