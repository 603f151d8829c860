//! 分类函数库
//!
//! 纯函数集合：把地址或上游地理信息映射为描述性标签。
//! 所有函数都是全函数，缺失的输入统一返回该函数约定的默认标签，不会产生错误。
//!
//! - `address`: 基于前两段的地址分类（A-E 类、私有、保留、bogon、风险）
//! - `network`: ISP / ASN 关键字匹配
//! - `region`: 以国家代码（地标以国家名称）为键的静态表
//! - `geometry`: 基于纬度/经度/时区偏移的分类
//! - `trivia`: 随机冷知识（可注入种子）

pub mod address;
pub mod geometry;
pub mod network;
pub mod region;
pub mod trivia;

pub use address::{IpClass, RiskLevel, assess_risk, ip_type, is_bogon, is_private, is_reserved};
pub use geometry::{
    climate_zone, equator_distance, format_utc_offset, hemisphere, local_time, longitude_side,
};
pub use network::{classify_isp, estimate_users, is_hosting_provider, is_mobile_carrier};
pub use region::{
    calling_code, continent, country_flag, currency, landmarks, languages, regional_emoji,
};
pub use trivia::{TRIVIA, TriviaPicker};

/// 带默认值的只读键值表
///
/// 键不存在或输入缺失时返回 `default`。
pub struct LookupTable<V: 'static> {
    entries: &'static [(&'static str, V)],
    default: V,
}

impl<V: Copy + 'static> LookupTable<V> {
    pub const fn new(entries: &'static [(&'static str, V)], default: V) -> Self {
        Self { entries, default }
    }

    pub fn get(&self, key: Option<&str>) -> V {
        key.and_then(|k| {
            self.entries
                .iter()
                .find(|(entry_key, _)| *entry_key == k)
                .map(|(_, value)| *value)
        })
        .unwrap_or(self.default)
    }
}
