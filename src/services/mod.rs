//! Service layer
//!
//! 上游地理位置查询和报告组装，与 HTTP 层解耦，测试中可直接调用。

pub mod geoip;
pub mod report;

pub use geoip::{ExternalApiProvider, GeoLookup, GeoRecord};
pub use report::{LookupReport, compose_report};
