//! 基于坐标和时区偏移的分类

use chrono::{DateTime, FixedOffset, Utc};

const UNKNOWN: &str = "❓ Unknown";

pub fn hemisphere(latitude: Option<f64>) -> &'static str {
    match latitude {
        Some(lat) if lat >= 0.0 => "⬆️ Northern Hemisphere",
        Some(_) => "⬇️ Southern Hemisphere",
        None => UNKNOWN,
    }
}

pub fn longitude_side(longitude: Option<f64>) -> &'static str {
    match longitude {
        Some(lon) if lon >= 0.0 => "➡️ Eastern Hemisphere",
        Some(_) => "⬅️ Western Hemisphere",
        None => UNKNOWN,
    }
}

/// 距赤道远近，分界 10° / 30° / 60°
pub fn equator_distance(latitude: Option<f64>) -> &'static str {
    let Some(lat) = latitude.map(f64::abs) else {
        return UNKNOWN;
    };
    if lat < 10.0 {
        "🌴 Very close to the equator"
    } else if lat < 30.0 {
        "☀️ Near the tropics"
    } else if lat < 60.0 {
        "🍂 Mid-latitudes"
    } else {
        "🧊 Far from the equator (near the poles)"
    }
}

/// 气候带，分界 23.5° / 35° / 60°
pub fn climate_zone(latitude: Option<f64>) -> &'static str {
    let Some(lat) = latitude.map(f64::abs) else {
        return UNKNOWN;
    };
    if lat < 23.5 {
        "🌴 Tropical"
    } else if lat < 35.0 {
        "🌞 Subtropical"
    } else if lat < 60.0 {
        "🌤️ Temperate"
    } else {
        "❄️ Polar"
    }
}

/// 秒级偏移 → `UTC+05:30`
pub fn format_utc_offset(offset_secs: Option<i64>) -> String {
    let Some(offset) = offset_secs else {
        return UNKNOWN.to_string();
    };
    let sign = if offset < 0 { '-' } else { '+' };
    let abs = offset.unsigned_abs();
    format!("UTC{}{:02}:{:02}", sign, abs / 3600, (abs % 3600) / 60)
}

/// 以上游给出的偏移计算当地时间
pub fn local_time(offset_secs: Option<i64>, now: DateTime<Utc>) -> String {
    offset_secs
        .and_then(|secs| i32::try_from(secs).ok())
        .and_then(FixedOffset::east_opt)
        .map(|tz| now.with_timezone(&tz).format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}
