//! IP 地址处理工具
//!
//! - 目标地址解析：`ip` 查询参数 → X-Forwarded-For → X-Real-IP → 默认地址
//! - 点分四段格式校验（不限制每段 ≤255，超范围的值原样交给上游服务）
//! - 解析为四段整数，供分类函数使用

use std::fmt;

use actix_web::http::header::HeaderMap;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::api::constants::DEFAULT_LOOKUP_IP;
use crate::errors::{IpscopeError, Result};

/// IPv4-mapped IPv6 前缀
const MAPPED_V4_PREFIX: &str = "::ffff:";

/// 四组 1-3 位 ASCII 数字，用点分隔
static DOTTED_QUAD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}$")
        .expect("dotted-quad pattern is valid")
});

/// 解析四段数值
///
/// 每段最多 3 位数字，因此 `u16` 足以容纳（最大 999）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Octets(pub [u16; 4]);

impl Octets {
    /// 从点分字符串解析；任何一段不是数字时返回 None
    pub fn parse(addr: &str) -> Option<Self> {
        let mut parts = [0u16; 4];
        let mut iter = addr.split('.');
        for slot in parts.iter_mut() {
            *slot = iter.next()?.parse().ok()?;
        }
        if iter.next().is_some() {
            return None;
        }
        Some(Self(parts))
    }

    pub fn first(&self) -> u16 {
        self.0[0]
    }

    pub fn second(&self) -> u16 {
        self.0[1]
    }

    /// 按大端拼接为整数（超范围段会按位溢出到更高位，使用 u64 保证不溢出）
    pub fn as_integer(&self) -> u64 {
        self.0
            .iter()
            .fold(0u64, |acc, &octet| (acc << 8) + u64::from(octet))
    }
}

impl fmt::Display for Octets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{}.{}.{}.{}", a, b, c, d)
    }
}

/// 通过格式校验的地址
///
/// 只能由 [`validate_address`] 构造。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedAddress {
    raw: String,
    octets: Octets,
}

impl ValidatedAddress {
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn octets(&self) -> Octets {
        self.octets
    }
}

impl fmt::Display for ValidatedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// 校验点分四段格式
pub fn is_dotted_quad(addr: &str) -> bool {
    DOTTED_QUAD.is_match(addr)
}

/// 校验并包装地址
pub fn validate_address(addr: &str) -> Result<ValidatedAddress> {
    if !is_dotted_quad(addr) {
        return Err(IpscopeError::validation(format!(
            "'{}' is not a valid IPv4 address",
            addr
        )));
    }

    let octets = Octets::parse(addr).ok_or_else(|| {
        IpscopeError::validation(format!("'{}' is not a valid IPv4 address", addr))
    })?;

    Ok(ValidatedAddress {
        raw: addr.to_string(),
        octets,
    })
}

/// 决定本次查询的目标地址
///
/// `ip` 参数存在且非空时原样使用（不 trim），否则从代理头推断，
/// 都没有时回退到默认地址。
pub fn resolve_target_address(query_ip: Option<&str>, headers: &HeaderMap) -> String {
    if let Some(ip) = query_ip.filter(|ip| !ip.is_empty()) {
        trace!("Using explicit ip parameter: {}", ip);
        return ip.to_string();
    }

    match extract_forwarded_ip_from_headers(headers) {
        Some(ip) => {
            trace!("Resolved address from proxy headers: {}", ip);
            ip
        }
        None => {
            trace!("No proxy headers, using default {}", DEFAULT_LOOKUP_IP);
            DEFAULT_LOOKUP_IP.to_string()
        }
    }
}

/// 按优先级检查的代理头
const FORWARDED_HEADERS: [&str; 2] = ["x-forwarded-for", "x-real-ip"];

/// 从 HeaderMap 提取转发的 IP
///
/// 依次检查 X-Forwarded-For、X-Real-IP；非 UTF-8 或首项为空的头视为不存在。
pub fn extract_forwarded_ip_from_headers(headers: &HeaderMap) -> Option<String> {
    FORWARDED_HEADERS.iter().find_map(|name| {
        headers
            .get(*name)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.split(',').next())
            .map(normalize_forwarded_entry)
            .filter(|ip| !ip.is_empty())
    })
}

/// 去掉空白、`::ffff:` 前缀和点分地址后的端口号
fn normalize_forwarded_entry(entry: &str) -> String {
    let trimmed = entry.trim();
    let unmapped = trimmed.strip_prefix(MAPPED_V4_PREFIX).unwrap_or(trimmed);

    match unmapped.split_once(':') {
        Some((host, port))
            if host.contains('.') && !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) =>
        {
            host.to_string()
        }
        _ => unmapped.to_string(),
    }
}
