//! 后台录入服务
//!
//! 将后台表单中每个分类的多行文本拆分后写入对应分类表。

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, instrument};

use crate::error::Result;
use crate::models::Category;
use crate::repository::LookupStore;

/// 按换行拆分文本并丢弃空行
///
/// 同时兼容 `\n`、`\r\n` 和单独的 `\r`；行内容不做任何校验或裁剪。
pub fn split_lines(text: &str) -> Vec<String> {
    text.split(['\r', '\n'])
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// 一次录入的结果
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    pub genre: usize,
    pub emotion: usize,
    pub fantasy: usize,
}

impl IngestReport {
    pub fn total(&self) -> usize {
        self.genre + self.emotion + self.fantasy
    }
}

impl fmt::Display for IngestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Added {} genre, {} emotion and {} fantasy values",
            self.genre, self.emotion, self.fantasy
        )
    }
}

/// 后台录入服务
pub struct AdminIngest<S: LookupStore> {
    store: Arc<S>,
}

impl<S: LookupStore> Clone for AdminIngest<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: LookupStore> AdminIngest<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// 录入三个分类的新值
    ///
    /// 按 genre、emotion、fantasy 顺序写入，遇到第一个失败即返回；
    /// 三个分类之间不做原子保证，已写入的行保留。
    #[instrument(skip_all)]
    pub async fn add_category_values(
        &self,
        genre_text: &str,
        emotion_text: &str,
        fantasy_text: &str,
    ) -> Result<IngestReport> {
        let report = IngestReport {
            genre: self.ingest(Category::Genre, genre_text).await?,
            emotion: self.ingest(Category::Emotion, emotion_text).await?,
            fantasy: self.ingest(Category::Fantasy, fantasy_text).await?,
        };

        info!(
            genre = report.genre,
            emotion = report.emotion,
            fantasy = report.fantasy,
            "Category values added"
        );

        Ok(report)
    }

    async fn ingest(&self, category: Category, text: &str) -> Result<usize> {
        let lines = split_lines(text);
        if lines.is_empty() {
            return Ok(0);
        }

        self.store.insert_values(category, &lines).await
    }
}
