//! Application lifecycle
//!
//! - `lifetime`: 启动前准备（上游客户端、冷知识随机源）
//! - `modes`: HTTP 服务器

pub mod lifetime;
pub mod modes;

pub use modes::run_server;
