//! 表单与响应体结构

use serde::{Deserialize, Serialize};
use validator::Validate;

/// JSON 接口错误响应体：`{"Error": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(rename = "Error")]
    pub error: String,
}

/// 后台录入表单
///
/// 每个字段为多行文本，一行一个值；内容不做校验，只限制单个字段的总长度
#[derive(Debug, Default, Deserialize, Validate)]
pub struct AdminForm {
    #[serde(default)]
    #[validate(length(max = 65536, message = "genre field is too long"))]
    pub genre: String,
    #[serde(default)]
    #[validate(length(max = 65536, message = "emotion field is too long"))]
    pub emotion: String,
    #[serde(default)]
    #[validate(length(max = 65536, message = "fantasy field is too long"))]
    pub fantasy: String,
}
