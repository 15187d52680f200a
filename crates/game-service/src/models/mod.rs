//! 游戏服务领域模型
//!
//! 包含分类、分类值和组合游戏的定义

pub mod category;
pub mod game;

pub use category::{Category, CategoryValue};
pub use game::Game;
