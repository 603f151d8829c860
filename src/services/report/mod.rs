//! 查询报告组装
//!
//! 把校验过的地址和上游记录组装成十个分节的响应。除冷知识外（由调用方传入），
//! 同样的输入总是产生同样的输出。

mod links;
pub mod types;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::api::constants::{API_VERSION, DATA_SOURCE};
use crate::classify::{self, address};
use crate::services::geoip::GeoRecord;
use crate::utils::ip::ValidatedAddress;

pub use links::build_quick_links;
pub use types::*;

fn text(value: &Option<String>) -> String {
    value
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(UNKNOWN)
        .to_string()
}

/// 组装完整报告
pub fn compose_report(
    addr: &ValidatedAddress,
    record: &GeoRecord,
    now: DateTime<Utc>,
    trivia: &'static str,
    raw_json: String,
) -> LookupReport {
    let octets = addr.octets();
    let ip = addr.as_str().to_string();
    let code = record.country_code.as_deref();

    let ip_class = classify::ip_type(&octets).label();
    let risk_level = classify::assess_risk(&octets).label();
    let isp = record.isp.as_deref();
    let timestamp = now.to_rfc3339_opts(SecondsFormat::Millis, true);
    let flag = classify::country_flag(code);

    let steps = Steps {
        ip_analysis: IpAnalysis {
            title: "🔍 IP Address Analysis",
            ip: ip.clone(),
            version: "IPv4",
            ip_class,
            is_private: classify::is_private(&octets),
            is_reserved: classify::is_reserved(&octets),
            is_bogon: classify::is_bogon(&octets),
            risk_level,
        },
        location: Location {
            title: "📍 Geographic Location",
            country: text(&record.country),
            country_code: text(&record.country_code),
            flag: flag.clone(),
            region: text(&record.region_name),
            city: text(&record.city),
            zip: text(&record.zip),
            continent: classify::continent(code),
        },
        coordinates: Coordinates {
            title: "🧭 Coordinates & Geography",
            latitude: record.lat.into(),
            longitude: record.lon.into(),
            hemisphere: classify::hemisphere(record.lat),
            east_west: classify::longitude_side(record.lon),
            distance_from_equator: classify::equator_distance(record.lat),
            climate_zone: classify::climate_zone(record.lat),
        },
        timezone: Timezone {
            title: "🕐 Time Zone",
            timezone: text(&record.timezone),
            utc_offset: classify::format_utc_offset(record.offset),
            daylight_saving: record.dst.into(),
            local_time: classify::local_time(record.offset, now),
        },
        network: Network {
            title: "🌐 Network Information",
            asn: text(&record.asn),
            isp: text(&record.isp),
            organization: text(&record.org),
            reverse_dns: text(&record.reverse),
            isp_type: classify::classify_isp(isp),
            estimated_users: classify::estimate_users(record.asn.as_deref()),
        },
        culture: Culture {
            title: "🎭 Culture & Economy",
            languages: classify::languages(code),
            currency: classify::currency(code),
            calling_code: classify::calling_code(code),
            regional_emoji: classify::regional_emoji(code),
        },
        security: Security {
            title: "🛡️ Security Assessment",
            risk_level,
            is_mobile_carrier: classify::is_mobile_carrier(isp),
            is_hosting_provider: classify::is_hosting_provider(isp),
            proxy_hint: if classify::is_hosting_provider(isp) {
                "⚠️ Datacenter address, traffic may come from a VPN, proxy or bot"
            } else {
                "✅ No datacenter indicators"
            },
        },
        technical: Technical {
            title: "⚙️ Technical Details",
            octets: octets.0,
            decimal: octets.as_integer(),
            binary: address::to_binary(&octets),
            hexadecimal: address::to_hex(&octets),
            reverse_pointer: address::reverse_pointer(&octets),
        },
        fun_facts: FunFacts {
            title: "🎉 Fun Facts",
            did_you_know: trivia,
            famous_landmarks: classify::landmarks(record.country.as_deref()),
        },
        metadata: Metadata {
            title: "📋 Lookup Metadata",
            data_source: DATA_SOURCE,
            upstream_status: text(&record.status),
            generated_at: timestamp.clone(),
            api_version: API_VERSION,
        },
    };

    let location = describe_location(record);
    let summary = Summary {
        ip: ip.clone(),
        one_liner: format!("{} is located in {} {}", ip, location, flag),
        location,
        isp: text(&record.isp),
        ip_class,
        risk_level,
    };

    LookupReport {
        success: true,
        message: "✅ IP lookup completed successfully".to_string(),
        quick_links: build_quick_links(&ip, record, raw_json),
        requested_ip: ip,
        timestamp,
        api_version: API_VERSION,
        steps,
        summary,
    }
}

/// "City, Region, Country"，跳过缺失的部分
fn describe_location(record: &GeoRecord) -> String {
    let parts: Vec<&str> = [&record.city, &record.region_name, &record.country]
        .into_iter()
        .filter_map(|p| p.as_deref().filter(|s| !s.is_empty()))
        .collect();

    if parts.is_empty() {
        "an unknown location".to_string()
    } else {
        parts.join(", ")
    }
}
