//! Lookup endpoint tests
//!
//! 使用 mock GeoLookup 驱动完整的路由、校验、组装和错误转换流程，不访问网络。

use std::sync::Arc;

use actix_web::http::{Method, StatusCode};
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use ipscope::api::middleware::RequestIdMiddleware;
use ipscope::api::services::{AppStartTime, LookupState};
use ipscope::classify::{TRIVIA, TriviaPicker};
use ipscope::errors::{IpscopeError, Result};
use ipscope::runtime::modes::configure_routes;
use ipscope::services::geoip::{GeoLookup, GeoRecord};

// =============================================================================
// Test Setup
// =============================================================================

enum Outcome {
    Record(GeoRecord),
    Failure,
}

struct MockLookup {
    outcome: Outcome,
    seen: Mutex<Vec<String>>,
}

impl MockLookup {
    fn new(outcome: Outcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            seen: Mutex::new(Vec::new()),
        })
    }

    fn success() -> Arc<Self> {
        Self::new(Outcome::Record(google_record()))
    }

    fn seen(&self) -> Vec<String> {
        self.seen.lock().clone()
    }
}

#[async_trait]
impl GeoLookup for MockLookup {
    async fn lookup(&self, ip: &str) -> Result<GeoRecord> {
        self.seen.lock().push(ip.to_string());
        match &self.outcome {
            Outcome::Record(record) => Ok(record.clone()),
            Outcome::Failure => Err(IpscopeError::upstream_failure("connection refused")),
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }

    fn raw_url(&self, ip: &str) -> String {
        format!("http://geo.test/json/{}", ip)
    }
}

fn google_record() -> GeoRecord {
    GeoRecord {
        status: Some("success".into()),
        country: Some("United States".into()),
        country_code: Some("US".into()),
        region_name: Some("Virginia".into()),
        city: Some("Ashburn".into()),
        zip: Some("20149".into()),
        lat: Some(39.03),
        lon: Some(-77.5),
        timezone: Some("America/New_York".into()),
        offset: Some(-14400),
        dst: Some(true),
        asn: Some("AS15169 Google LLC".into()),
        org: Some("Google Public DNS".into()),
        isp: Some("Google LLC".into()),
        reverse: Some("dns.google".into()),
        ..Default::default()
    }
}

fn rejection(message: Option<&str>) -> GeoRecord {
    GeoRecord {
        status: Some("fail".into()),
        message: message.map(str::to_string),
        ..Default::default()
    }
}

macro_rules! lookup_app {
    ($geo:expr) => {
        lookup_app!($geo, TriviaPicker::seeded(7))
    };
    ($geo:expr, $trivia:expr) => {{
        let geo: Arc<dyn GeoLookup> = $geo.clone();
        test::init_service(
            App::new()
                .wrap(RequestIdMiddleware)
                .app_data(web::Data::new(LookupState::new(geo, $trivia)))
                .app_data(web::Data::new(AppStartTime::now()))
                .configure(|cfg| configure_routes(cfg, "/api")),
        )
        .await
    }};
}

const STEP_KEYS: [&str; 10] = [
    "step_1_ip_analysis",
    "step_2_location",
    "step_3_coordinates",
    "step_4_timezone",
    "step_5_network",
    "step_6_culture",
    "step_7_security",
    "step_8_technical",
    "step_9_fun_facts",
    "step_10_metadata",
];

// =============================================================================
// Success path
// =============================================================================

#[actix_web::test]
async fn test_lookup_success_report_shape() {
    let geo = MockLookup::success();
    let app = lookup_app!(geo);

    let req = TestRequest::get().uri("/api?ip=8.8.8.8").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("Access-Control-Allow-Origin").unwrap(),
        "*"
    );

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["requested_ip"], "8.8.8.8");
    assert_eq!(body["api_version"], "2.0.0");

    let steps = body["steps"].as_object().unwrap();
    assert_eq!(steps.len(), 10);
    for key in STEP_KEYS {
        assert!(steps.contains_key(key), "missing section {}", key);
    }

    assert_eq!(body["steps"]["step_2_location"]["flag"], "🇺🇸");
    assert_eq!(body["steps"]["step_2_location"]["continent"], "🌎 North America");
    assert_eq!(body["summary"]["ip"], "8.8.8.8");
    assert_eq!(
        body["summary"]["location"],
        "Ashburn, Virginia, United States"
    );
    assert!(body["quick_links"]["google_maps"].is_string());
    assert_eq!(body["quick_links"]["raw_json"], "http://geo.test/json/8.8.8.8");
    assert_eq!(geo.seen(), vec!["8.8.8.8".to_string()]);
}

#[actix_web::test]
async fn test_lookup_sparse_record_uses_placeholders() {
    let geo = MockLookup::new(Outcome::Record(GeoRecord {
        status: Some("success".into()),
        ..Default::default()
    }));
    let app = lookup_app!(geo);

    let req = TestRequest::get().uri("/api?ip=1.2.3.4").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["steps"]["step_3_coordinates"]["latitude"], "not available");
    assert_eq!(body["steps"]["step_2_location"]["city"], "Unknown");
    assert_eq!(body["steps"]["step_2_location"]["flag"], "🏳️");
    assert_eq!(body["quick_links"]["google_maps"], "not available");
}

#[actix_web::test]
async fn test_lookup_mounted_at_root() {
    let geo = MockLookup::success();
    let app = lookup_app!(geo);

    let req = TestRequest::get().uri("/?ip=1.1.1.1").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(geo.seen(), vec!["1.1.1.1".to_string()]);
}

#[actix_web::test]
async fn test_lookup_sets_request_id() {
    let geo = MockLookup::success();
    let app = lookup_app!(geo);

    let req = TestRequest::get().uri("/api").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.headers().contains_key("x-request-id"));
}

#[actix_web::test]
async fn test_seeded_trivia_is_deterministic() {
    let geo = MockLookup::success();
    let first = lookup_app!(geo, TriviaPicker::seeded(42));
    let second = lookup_app!(geo, TriviaPicker::seeded(42));

    let mut a = Vec::new();
    let mut b = Vec::new();
    for _ in 0..3 {
        let resp = test::call_service(&first, TestRequest::get().uri("/api").to_request()).await;
        let body: Value = test::read_body_json(resp).await;
        a.push(body["steps"]["step_9_fun_facts"]["did_you_know"].clone());

        let resp = test::call_service(&second, TestRequest::get().uri("/api").to_request()).await;
        let body: Value = test::read_body_json(resp).await;
        b.push(body["steps"]["step_9_fun_facts"]["did_you_know"].clone());
    }

    assert_eq!(a, b);
    for fact in &a {
        assert!(TRIVIA.contains(&fact.as_str().unwrap()));
    }
}

// =============================================================================
// Address resolution
// =============================================================================

#[actix_web::test]
async fn test_default_address_without_param_or_headers() {
    let geo = MockLookup::success();
    let app = lookup_app!(geo);

    let resp = test::call_service(&app, TestRequest::get().uri("/api").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["requested_ip"], "8.8.8.8");
    assert_eq!(geo.seen(), vec!["8.8.8.8".to_string()]);
}

#[actix_web::test]
async fn test_empty_param_falls_back_to_default() {
    let geo = MockLookup::success();
    let app = lookup_app!(geo);

    let resp = test::call_service(&app, TestRequest::get().uri("/api?ip=").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(geo.seen(), vec!["8.8.8.8".to_string()]);
}

#[actix_web::test]
async fn test_forwarded_for_first_entry() {
    let geo = MockLookup::success();
    let app = lookup_app!(geo);

    let req = TestRequest::get()
        .uri("/api")
        .insert_header(("X-Forwarded-For", "203.0.113.7, 10.0.0.1"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["requested_ip"], "203.0.113.7");
    assert_eq!(geo.seen(), vec!["203.0.113.7".to_string()]);
}

#[actix_web::test]
async fn test_real_ip_with_port() {
    let geo = MockLookup::success();
    let app = lookup_app!(geo);

    let req = TestRequest::get()
        .uri("/api")
        .insert_header(("X-Real-IP", "198.51.100.4:8080"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(geo.seen(), vec!["198.51.100.4".to_string()]);
}

#[actix_web::test]
async fn test_blank_forwarded_for_uses_real_ip() {
    let geo = MockLookup::success();
    let app = lookup_app!(geo);

    let req = TestRequest::get()
        .uri("/api")
        .insert_header(("X-Forwarded-For", ""))
        .insert_header(("X-Real-IP", "4.4.4.4"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(geo.seen(), vec!["4.4.4.4".to_string()]);
}

#[actix_web::test]
async fn test_query_param_wins_over_headers() {
    let geo = MockLookup::success();
    let app = lookup_app!(geo);

    let req = TestRequest::get()
        .uri("/api?ip=9.9.9.9")
        .insert_header(("X-Forwarded-For", "203.0.113.7"))
        .to_request();
    test::call_service(&app, req).await;

    assert_eq!(geo.seen(), vec!["9.9.9.9".to_string()]);
}

// =============================================================================
// Validation
// =============================================================================

#[actix_web::test]
async fn test_invalid_address_rejected() {
    let geo = MockLookup::success();
    let app = lookup_app!(geo);

    for bad in ["abc", "1.2.3", "1.2.3.4.5", "1234.1.1.1", "1.2.3.4%20"] {
        let req = TestRequest::get().uri(&format!("/api?ip={}", bad)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "input {:?}", bad);
        assert_eq!(
            resp.headers().get("Access-Control-Allow-Origin").unwrap(),
            "*"
        );

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid IP address format");
        assert_eq!(body["example"], "?ip=8.8.8.8");
        assert!(body.get("steps").is_none());
    }

    assert!(geo.seen().is_empty());
}

#[actix_web::test]
async fn test_out_of_range_octets_passed_through() {
    let geo = MockLookup::success();
    let app = lookup_app!(geo);

    let req = TestRequest::get()
        .uri("/api?ip=999.999.999.999")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["steps"]["step_1_ip_analysis"]["ip_class"],
        "Class E (Experimental)"
    );
    assert_eq!(body["steps"]["step_1_ip_analysis"]["is_reserved"], true);
    assert_eq!(body["steps"]["step_8_technical"]["decimal"], 16826165991u64);
    assert_eq!(geo.seen(), vec!["999.999.999.999".to_string()]);
}

// =============================================================================
// Upstream errors
// =============================================================================

#[actix_web::test]
async fn test_upstream_rejection_returns_400() {
    let geo = MockLookup::new(Outcome::Record(rejection(Some("private range"))));
    let app = lookup_app!(geo);

    let req = TestRequest::get().uri("/api?ip=10.0.0.1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "IP lookup failed");
    assert_eq!(body["message"], "private range");
    assert!(body.get("steps").is_none());
    assert!(body.get("success").is_none());
}

#[actix_web::test]
async fn test_upstream_rejection_without_message() {
    let geo = MockLookup::new(Outcome::Record(rejection(None)));
    let app = lookup_app!(geo);

    let req = TestRequest::get().uri("/api?ip=127.0.0.1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "The geolocation service could not resolve this address"
    );
}

#[actix_web::test]
async fn test_upstream_failure_returns_500() {
    let geo = MockLookup::new(Outcome::Failure);
    let app = lookup_app!(geo);

    let req = TestRequest::get().uri("/api?ip=8.8.8.8").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        resp.headers().get("Access-Control-Allow-Origin").unwrap(),
        "*"
    );

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Internal server error");
    assert!(body["support"].is_string());
}

// =============================================================================
// Methods
// =============================================================================

#[actix_web::test]
async fn test_options_preflight() {
    let geo = MockLookup::success();
    let app = lookup_app!(geo);

    let req = TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/api")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let headers = resp.headers();
    assert_eq!(headers.get("Access-Control-Allow-Origin").unwrap(), "*");
    assert_eq!(
        headers.get("Access-Control-Allow-Methods").unwrap(),
        "GET, OPTIONS"
    );
    assert_eq!(
        headers.get("Access-Control-Allow-Headers").unwrap(),
        "Content-Type"
    );

    let body = test::read_body(resp).await;
    assert!(body.is_empty());
    assert!(geo.seen().is_empty());
}

#[actix_web::test]
async fn test_other_methods_not_allowed() {
    let geo = MockLookup::success();
    let app = lookup_app!(geo);

    for method in [Method::POST, Method::PUT, Method::DELETE] {
        let req = TestRequest::default()
            .method(method.clone())
            .uri("/api?ip=8.8.8.8")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED, "{}", method);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Method not allowed");
        assert!(body["message"].as_str().unwrap().contains(method.as_str()));
    }

    assert!(geo.seen().is_empty());
}
