//! 查询报告的响应结构
//!
//! 十个分节、summary 和 quick_links。所有字段都会被填充，缺失的数据用占位值表示。

use serde::Serialize;

/// 缺失数值字段的占位文本
pub const NOT_AVAILABLE: &str = "not available";

/// 缺失文本字段的占位文本
pub const UNKNOWN: &str = "Unknown";

/// 可能缺失的字段：有值时按原类型序列化，缺失时序列化为占位字符串
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reported<T> {
    Value(T),
    Missing(&'static str),
}

impl<T> From<Option<T>> for Reported<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Reported::Value(v),
            None => Reported::Missing(NOT_AVAILABLE),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LookupReport {
    pub success: bool,
    pub message: String,
    pub requested_ip: String,
    pub timestamp: String,
    pub api_version: &'static str,
    pub steps: Steps,
    pub summary: Summary,
    pub quick_links: QuickLinks,
}

/// 十个固定分节
#[derive(Debug, Clone, Serialize)]
pub struct Steps {
    #[serde(rename = "step_1_ip_analysis")]
    pub ip_analysis: IpAnalysis,
    #[serde(rename = "step_2_location")]
    pub location: Location,
    #[serde(rename = "step_3_coordinates")]
    pub coordinates: Coordinates,
    #[serde(rename = "step_4_timezone")]
    pub timezone: Timezone,
    #[serde(rename = "step_5_network")]
    pub network: Network,
    #[serde(rename = "step_6_culture")]
    pub culture: Culture,
    #[serde(rename = "step_7_security")]
    pub security: Security,
    #[serde(rename = "step_8_technical")]
    pub technical: Technical,
    #[serde(rename = "step_9_fun_facts")]
    pub fun_facts: FunFacts,
    #[serde(rename = "step_10_metadata")]
    pub metadata: Metadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct IpAnalysis {
    pub title: &'static str,
    pub ip: String,
    pub version: &'static str,
    pub ip_class: &'static str,
    pub is_private: bool,
    pub is_reserved: bool,
    pub is_bogon: bool,
    pub risk_level: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Location {
    pub title: &'static str,
    pub country: String,
    pub country_code: String,
    pub flag: String,
    pub region: String,
    pub city: String,
    pub zip: String,
    pub continent: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Coordinates {
    pub title: &'static str,
    pub latitude: Reported<f64>,
    pub longitude: Reported<f64>,
    pub hemisphere: &'static str,
    pub east_west: &'static str,
    pub distance_from_equator: &'static str,
    pub climate_zone: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Timezone {
    pub title: &'static str,
    pub timezone: String,
    pub utc_offset: String,
    pub daylight_saving: Reported<bool>,
    pub local_time: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Network {
    pub title: &'static str,
    pub asn: String,
    pub isp: String,
    pub organization: String,
    pub reverse_dns: String,
    pub isp_type: &'static str,
    pub estimated_users: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Culture {
    pub title: &'static str,
    pub languages: &'static [&'static str],
    pub currency: &'static str,
    pub calling_code: &'static str,
    pub regional_emoji: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Security {
    pub title: &'static str,
    pub risk_level: &'static str,
    pub is_mobile_carrier: bool,
    pub is_hosting_provider: bool,
    pub proxy_hint: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Technical {
    pub title: &'static str,
    pub octets: [u16; 4],
    pub decimal: u64,
    pub binary: String,
    pub hexadecimal: String,
    pub reverse_pointer: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FunFacts {
    pub title: &'static str,
    pub did_you_know: &'static str,
    pub famous_landmarks: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct Metadata {
    pub title: &'static str,
    pub data_source: &'static str,
    pub upstream_status: String,
    pub generated_at: String,
    pub api_version: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub ip: String,
    pub location: String,
    pub isp: String,
    pub ip_class: &'static str,
    pub risk_level: &'static str,
    pub one_liner: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuickLinks {
    pub google_maps: Reported<String>,
    pub openstreetmap: Reported<String>,
    pub whois: String,
    pub abuse_report: String,
    pub raw_json: String,
}
