//! 基于段值的地址分类
//!
//! 只看第一、二段；段值可能超过 255（校验阶段不限制范围），超范围的首段按 E 类处理。

use serde::Serialize;

use crate::utils::ip::Octets;

/// 传统 IPv4 地址类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IpClass {
    A,
    B,
    C,
    D,
    E,
}

impl IpClass {
    pub fn label(&self) -> &'static str {
        match self {
            IpClass::A => "Class A (Large networks)",
            IpClass::B => "Class B (Medium networks)",
            IpClass::C => "Class C (Small networks)",
            IpClass::D => "Class D (Multicast)",
            IpClass::E => "Class E (Experimental)",
        }
    }
}

/// 风险等级，优先级 private > reserved > bogon > public
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    Private,
    Reserved,
    Bogon,
    Public,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Private => "🏠 Private network address (not routable on the internet)",
            RiskLevel::Reserved => "⚠️ Reserved address space",
            RiskLevel::Bogon => "🚫 Bogon address (should never appear on the public internet)",
            RiskLevel::Public => "✅ Public address (normal)",
        }
    }
}

pub fn ip_type(octets: &Octets) -> IpClass {
    match octets.first() {
        0..=127 => IpClass::A,
        128..=191 => IpClass::B,
        192..=223 => IpClass::C,
        224..=239 => IpClass::D,
        _ => IpClass::E,
    }
}

/// 10.0.0.0/8, 172.16.0.0/12, 192.168.0.0/16
pub fn is_private(octets: &Octets) -> bool {
    match (octets.first(), octets.second()) {
        (10, _) => true,
        (172, 16..=31) => true,
        (192, 168) => true,
        _ => false,
    }
}

pub fn is_reserved(octets: &Octets) -> bool {
    octets.first() == 0 || octets.first() >= 224
}

/// 127.0.0.0/8（loopback）和 169.254.0.0/16（link-local）
pub fn is_bogon(octets: &Octets) -> bool {
    matches!((octets.first(), octets.second()), (127, _) | (169, 254))
}

pub fn assess_risk(octets: &Octets) -> RiskLevel {
    if is_private(octets) {
        RiskLevel::Private
    } else if is_reserved(octets) {
        RiskLevel::Reserved
    } else if is_bogon(octets) {
        RiskLevel::Bogon
    } else {
        RiskLevel::Public
    }
}

/// 每段 8 位二进制，用点连接（超范围段会超过 8 位）
pub fn to_binary(octets: &Octets) -> String {
    octets
        .0
        .iter()
        .map(|o| format!("{:08b}", o))
        .collect::<Vec<_>>()
        .join(".")
}

pub fn to_hex(octets: &Octets) -> String {
    let digits: String = octets.0.iter().map(|o| format!("{:02X}", o)).collect();
    format!("0x{}", digits)
}

/// 反向解析使用的 PTR 名称
pub fn reverse_pointer(octets: &Octets) -> String {
    let [a, b, c, d] = octets.0;
    format!("{}.{}.{}.{}.in-addr.arpa", d, c, b, a)
}
