//! HTTP 层：路由、处理器和中间件

pub mod constants;
pub mod middleware;
pub mod services;
