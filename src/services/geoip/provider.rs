//! GeoIP 查询抽象层
//!
//! 上游记录结构和统一的查询 trait。handler 只依赖 trait，测试中可注入 mock。

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::{IpscopeError, Result};

/// 上游成功状态
const STATUS_SUCCESS: &str = "success";

/// 未指定上游地址时 raw_json 链接使用的模板
pub const DEFAULT_RAW_URL_TEMPLATE: &str = "http://ip-api.com/json/{ip}";

/// 上游（ip-api.com 格式）返回的地理位置记录
///
/// 所有字段都可能缺失，分类函数对缺失字段返回占位值。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoRecord {
    pub status: Option<String>,
    pub message: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub region_name: Option<String>,
    pub city: Option<String>,
    pub zip: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub timezone: Option<String>,
    /// UTC 偏移（秒）
    pub offset: Option<i64>,
    pub dst: Option<bool>,
    /// "AS15169 Google LLC" 形式
    #[serde(rename = "as")]
    pub asn: Option<String>,
    pub org: Option<String>,
    pub isp: Option<String>,
    /// 反向 DNS 名称
    pub reverse: Option<String>,
}

impl GeoRecord {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some(STATUS_SUCCESS)
    }

    /// 非 success 状态转换为 UpstreamRejection
    pub fn into_success(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(IpscopeError::upstream_rejection(self.message))
        }
    }
}

/// GeoIP 查询 trait
#[async_trait]
pub trait GeoLookup: Send + Sync {
    /// 查询一次上游；传输失败、非 2xx、响应体无法解析时返回 UpstreamFailure
    async fn lookup(&self, ip: &str) -> Result<GeoRecord>;

    /// 获取 provider 名称（用于日志）
    fn name(&self) -> &'static str;

    /// 报告中 quick_links.raw_json 指向的地址
    fn raw_url(&self, ip: &str) -> String {
        DEFAULT_RAW_URL_TEMPLATE.replace("{ip}", ip)
    }
}
