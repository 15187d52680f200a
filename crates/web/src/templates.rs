//! HTML 模板引擎
//!
//! 每个页面模板在加载时并入 `base.html` 的 `{{content}}` 占位处，
//! 渲染时将 `{{variable}}` 替换为上下文中 HTML 转义后的值。
//!
//! ## 使用示例
//!
//! ```ignore
//! let engine = TemplateEngine::load(Path::new("templates"))?;
//!
//! let context = TemplateContext::new()
//!     .with("title", "A roguelike about grief in a submarine")
//!     .with("permalink", "/l/010203");
//!
//! let html = engine.render(Page::Main, &context)?;
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::{info, warn};

/// 基础模板文件名
pub const BASE_TEMPLATE: &str = "base.html";

/// 基础模板中页面内容的占位符
pub const CONTENT_SLOT: &str = "{{content}}";

/// 匹配 {{variable_name}}，变量名支持字母、数字、下划线
static VARIABLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(\w+)\}\}").expect("placeholder pattern is valid"));

/// 页面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Main,
    Faq,
    Admin,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Main, Page::Faq, Page::Admin];

    pub fn file_name(self) -> &'static str {
        match self {
            Self::Main => "main.html",
            Self::Faq => "faq.html",
            Self::Admin => "admin.html",
        }
    }
}

/// 模板错误
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("failed to read template {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("base template has no content slot")]
    MissingSlot,

    #[error("template not loaded: {0:?}")]
    MissingPage(Page),
}

/// 渲染上下文
#[derive(Debug, Default, Clone)]
pub struct TemplateContext {
    values: HashMap<String, String>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

/// 模板引擎
///
/// 加载后只读，通过 `Arc` 在 handler 间共享
#[derive(Debug)]
pub struct TemplateEngine {
    pages: HashMap<Page, String>,
}

impl TemplateEngine {
    /// 从目录加载基础模板和全部页面模板，任一文件缺失即失败
    pub fn load(dir: &Path) -> Result<Self, TemplateError> {
        let base = read_template(&dir.join(BASE_TEMPLATE))?;

        let mut sources = Vec::with_capacity(Page::ALL.len());
        for page in Page::ALL {
            sources.push((page, read_template(&dir.join(page.file_name()))?));
        }

        let engine = Self::from_sources(
            &base,
            sources.iter().map(|(page, source)| (*page, source.as_str())),
        )?;

        info!(dir = %dir.display(), pages = engine.pages.len(), "Templates loaded");
        Ok(engine)
    }

    /// 由内存中的模板源构建
    pub fn from_sources<'a>(
        base: &str,
        pages: impl IntoIterator<Item = (Page, &'a str)>,
    ) -> Result<Self, TemplateError> {
        if !base.contains(CONTENT_SLOT) {
            return Err(TemplateError::MissingSlot);
        }

        let pages = pages
            .into_iter()
            .map(|(page, child)| (page, base.replacen(CONTENT_SLOT, child, 1)))
            .collect();

        Ok(Self { pages })
    }

    /// 渲染页面
    ///
    /// 未找到的变量会保留原样并记录警告日志。
    pub fn render(&self, page: Page, context: &TemplateContext) -> Result<String, TemplateError> {
        let template = self
            .pages
            .get(&page)
            .ok_or(TemplateError::MissingPage(page))?;

        let rendered = VARIABLE_REGEX.replace_all(template, |caps: &Captures| {
            let name = &caps[1];
            match context.get(name) {
                Some(value) => escape_html(value),
                None => {
                    warn!(variable = name, page = ?page, "Template variable missing, kept as-is");
                    caps[0].to_string()
                }
            }
        });

        Ok(rendered.into_owned())
    }
}

fn read_template(path: &Path) -> Result<String, TemplateError> {
    std::fs::read_to_string(path).map_err(|source| TemplateError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// HTML 转义
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
