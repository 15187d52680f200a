//! 业务服务层
//!
//! - `composer`: 随机组合游戏、根据链接还原游戏
//! - `ingest`: 后台批量录入分类值

mod composer;
mod ingest;

pub use composer::GameComposer;
pub use ingest::{AdminIngest, IngestReport, split_lines};
