//! quick_links 分节

use super::types::{NOT_AVAILABLE, QuickLinks, Reported};
use crate::services::geoip::GeoRecord;

const OSM_ZOOM: u8 = 10;

pub fn build_quick_links(ip: &str, record: &GeoRecord, raw_json: String) -> QuickLinks {
    let coords = record.lat.zip(record.lon);

    QuickLinks {
        google_maps: coords
            .map(|(lat, lon)| format!("https://www.google.com/maps?q={},{}", lat, lon))
            .into(),
        openstreetmap: match coords {
            Some((lat, lon)) => Reported::Value(format!(
                "https://www.openstreetmap.org/?mlat={lat}&mlon={lon}#map={OSM_ZOOM}/{lat}/{lon}"
            )),
            None => Reported::Missing(NOT_AVAILABLE),
        },
        whois: format!("https://who.is/whois-ip/ip-address/{}", ip),
        abuse_report: format!("https://www.abuseipdb.com/check/{}", ip),
        raw_json,
    }
}
