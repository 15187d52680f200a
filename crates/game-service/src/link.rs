//! 链接编解码
//!
//! 链接由三个两位十六进制数拼接而成，依次对应 genre、emotion、fantasy 的行 id，
//! 例如 `(1, 2, 171)` 编码为 `"0102ab"`。id 必须落在单字节范围内。

use std::fmt;
use std::str::FromStr;

use crate::error::{GameError, Result};

/// 链接固定长度
pub const LINK_LEN: usize = 6;

/// 能编码进链接的最大行 id
pub const MAX_LINK_ID: i64 = u8::MAX as i64;

/// 链接中解析出的三个行 id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinkIds {
    pub genre: u8,
    pub emotion: u8,
    pub fantasy: u8,
}

impl LinkIds {
    pub fn new(genre: u8, emotion: u8, fantasy: u8) -> Self {
        Self {
            genre,
            emotion,
            fantasy,
        }
    }

    /// 编码为链接
    pub fn encode(&self) -> String {
        encode(self.genre, self.emotion, self.fantasy)
    }
}

impl fmt::Display for LinkIds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.genre, self.emotion, self.fantasy)
    }
}

impl FromStr for LinkIds {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        decode(s)
    }
}

/// 编码三个 id，每个 id 固定两位小写十六进制（不足补零）
pub fn encode(genre_id: u8, emotion_id: u8, fantasy_id: u8) -> String {
    LinkIds::new(genre_id, emotion_id, fantasy_id).to_string()
}

/// 解码链接
///
/// 长度必须恰好为 6，且每组两个字符都是十六进制数字（大小写均可）。
/// 正负号、空白和非 ASCII 字符一律视为非法。
pub fn decode(link: &str) -> Result<LinkIds> {
    let bytes = link.as_bytes();
    if bytes.len() != LINK_LEN {
        return Err(GameError::InvalidLink(format!(
            "expected {LINK_LEN} characters, got {}",
            link.chars().count()
        )));
    }

    let mut ids = [0u8; 3];
    for (slot, pair) in ids.iter_mut().zip(bytes.chunks_exact(2)) {
        *slot = parse_hex_pair(pair).ok_or_else(|| {
            GameError::InvalidLink(format!("{:?} is not a hex byte", String::from_utf8_lossy(pair)))
        })?;
    }

    Ok(LinkIds::new(ids[0], ids[1], ids[2]))
}

fn parse_hex_pair(pair: &[u8]) -> Option<u8> {
    let high = hex_digit(pair[0])?;
    let low = hex_digit(pair[1])?;
    Some((high << 4) | low)
}

fn hex_digit(byte: u8) -> Option<u8> {
    (byte as char).to_digit(16).map(|d| d as u8)
}
