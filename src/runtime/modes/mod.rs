//! Execution modes
//!
//! 目前只有 HTTP 服务器模式；`--print-config` 在 main 中直接处理。

pub mod server;

pub use server::{configure_routes, run_server};
