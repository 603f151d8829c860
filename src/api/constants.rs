//! API 模块常量定义
//!
//! 包含 CORS 头、默认地址和响应信封中的固定文本。

/// 未提供 `ip` 参数且没有代理头时使用的地址
pub const DEFAULT_LOOKUP_IP: &str = "8.8.8.8";

/// 响应信封中的 API 版本
pub const API_VERSION: &str = "2.0.0";

/// 所有 JSON 响应都携带的 CORS 头
pub const ALLOW_ORIGIN_ANY: (&str, &str) = ("Access-Control-Allow-Origin", "*");

/// 预检请求允许的方法
pub const ALLOW_METHODS: (&str, &str) = ("Access-Control-Allow-Methods", "GET, OPTIONS");

/// 预检请求允许的头
pub const ALLOW_HEADERS: (&str, &str) = ("Access-Control-Allow-Headers", "Content-Type");

/// 错误响应中给出的示例查询
pub const EXAMPLE_QUERY: &str = "?ip=8.8.8.8";

/// 500 错误中附带的支持信息
pub const SUPPORT_CONTACT: &str = "If the problem persists, open an issue on the project repository";

/// 数据来源说明
pub const DATA_SOURCE: &str = "ip-api.com";
