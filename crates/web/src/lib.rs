//! nextindiega.me 网站服务
//!
//! 提供随机游戏标题页面、链接还原页面、JSON 接口和分类值录入后台。
//!
//! ## 模块结构
//!
//! - `cli`: 命令行参数
//! - `dto`: 表单与响应体结构
//! - `error`: HTML / JSON 两种错误响应
//! - `handlers`: HTTP 请求处理器
//! - `routes`: 路由配置
//! - `state`: 应用状态
//! - `templates`: HTML 模板引擎（基础模板 + 页面模板合并）
//!
//! ## 技术栈
//!
//! - Web 框架：Axum
//! - 数据库：SQLite (sqlx)
//! - 数据验证：validator

pub mod cli;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod templates;

pub use error::{ApiError, HtmlError, WebError};
pub use state::AppState;
pub use templates::{Page, TemplateContext, TemplateEngine};
