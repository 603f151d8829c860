//! GeoIP 服务模块
//!
//! 通过外部 HTTP API（ip-api.com 格式）查询 IP 地址的地理位置。

mod external_api;
mod provider;

pub use external_api::ExternalApiProvider;
pub use provider::{DEFAULT_RAW_URL_TEMPLATE, GeoLookup, GeoRecord};
