//! HTTP 请求处理器模块

pub mod admin;
pub mod game;
pub mod pages;
