//! ISP / ASN 分类
//!
//! 全部基于小写后的子串匹配。

const MOBILE_KEYWORDS: &[&str] = &["mobile", "wireless", "cellular"];
const RESIDENTIAL_KEYWORDS: &[&str] = &[
    "comcast", "verizon", "at&t", "spectrum", "charter", "cox", "xfinity",
];
const CLOUD_KEYWORDS: &[&str] = &[
    "amazon",
    "aws",
    "google",
    "microsoft",
    "azure",
    "cloudflare",
    "digitalocean",
    "oracle",
];
const HOSTING_KEYWORDS: &[&str] = &["host", "server"];
const EDUCATION_KEYWORDS: &[&str] = &["education", "university"];
const GOVERNMENT_KEYWORDS: &[&str] = &["government", "gov"];

/// is_hosting_provider 使用的更宽的关键字集合
const DATACENTER_KEYWORDS: &[&str] = &[
    "host",
    "server",
    "cloud",
    "data center",
    "datacenter",
    "amazon",
    "google",
    "microsoft",
    "digitalocean",
    "linode",
    "ovh",
    "hetzner",
    "vultr",
];

const UNKNOWN_ISP: &str = "❓ Unknown";

/// (ASN, 描述)：子串匹配，按顺序第一个命中生效
const KNOWN_ASNS: &[(&str, &str)] = &[
    ("AS15169", "🔵 Billions of users (Google)"),
    ("AS32934", "🔷 Billions of users (Meta / Facebook)"),
    ("AS8075", "🟦 Hundreds of millions of users (Microsoft)"),
    ("AS4134", "🟥 Hundreds of millions of users (China Telecom)"),
];
const GENERIC_USER_ESTIMATE: &str = "📊 Thousands to millions of users (regional network)";

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| haystack.contains(k))
}

/// ISP 类型，按顺序第一个命中的规则生效
pub fn classify_isp(isp: Option<&str>) -> &'static str {
    let Some(isp) = isp.filter(|s| !s.is_empty()) else {
        return UNKNOWN_ISP;
    };
    let isp = isp.to_lowercase();

    let rules: [(&[&str], &'static str); 6] = [
        (MOBILE_KEYWORDS, "📱 Mobile Carrier"),
        (RESIDENTIAL_KEYWORDS, "🏠 Residential ISP"),
        (CLOUD_KEYWORDS, "☁️ Cloud Provider"),
        (HOSTING_KEYWORDS, "🖥️ Hosting Provider"),
        (EDUCATION_KEYWORDS, "🎓 Educational Institution"),
        (GOVERNMENT_KEYWORDS, "🏛️ Government Network"),
    ];

    rules
        .iter()
        .find(|(keywords, _)| contains_any(&isp, keywords))
        .map(|(_, label)| *label)
        .unwrap_or("🌐 Internet Service Provider")
}

pub fn is_mobile_carrier(isp: Option<&str>) -> bool {
    isp.is_some_and(|s| contains_any(&s.to_lowercase(), MOBILE_KEYWORDS))
}

pub fn is_hosting_provider(isp: Option<&str>) -> bool {
    isp.is_some_and(|s| contains_any(&s.to_lowercase(), DATACENTER_KEYWORDS))
}

/// 按 ASN 估算用户规模
pub fn estimate_users(asn: Option<&str>) -> &'static str {
    asn.and_then(|asn| {
        KNOWN_ASNS
            .iter()
            .find(|(number, _)| asn.contains(number))
            .map(|(_, label)| *label)
    })
    .unwrap_or(GENERIC_USER_ESTIMATE)
}
