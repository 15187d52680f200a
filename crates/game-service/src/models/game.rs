//! 组合游戏模型
//!
//! 每次请求临时构造，不落库

use serde::{Deserialize, Serialize};

/// 链接路径前缀
pub const LINK_PATH_PREFIX: &str = "/l/";

/// 由三张查找表各取一个值组合成的游戏
///
/// JSON 字段名使用 PascalCase：`{"Genre", "Emotion", "Fantasy", "Link"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Game {
    pub genre: String,
    pub emotion: String,
    pub fantasy: String,
    /// 6 位十六进制链接值
    pub link: String,
}

impl Game {
    /// 可分享的链接路径，如 `/l/0a0b0c`
    pub fn permalink(&self) -> String {
        format!("{LINK_PATH_PREFIX}{}", self.link)
    }

    /// 展示用标题："A {genre} about {emotion} in {fantasy}"
    pub fn title(&self) -> String {
        format!(
            "{} {} about {} in {}",
            indefinite_article(&self.genre),
            self.genre,
            self.emotion,
            self.fantasy
        )
    }
}

/// 元音开头用 "An"，但 "One"、"One-button" 这类读作 /w/ 的保留 "A"
fn indefinite_article(word: &str) -> &'static str {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return "A";
    };
    if !"AEIOUaeiou".contains(first) {
        return "A";
    }

    if let Some(after) = chars.as_str().strip_prefix("ne") {
        let at_word_end = after
            .chars()
            .next()
            .is_none_or(|c| !(c.is_ascii_alphanumeric() || c == '_'));
        if at_word_end {
            return "A";
        }
    }

    "An"
}
