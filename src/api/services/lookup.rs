//! IP 查询接口
//!
//! GET 执行查询，OPTIONS 返回 CORS 预检头，其他方法返回 405。
//! 所有失败都在这里统一转换为 JSON 错误体（见 `IpscopeError` 的 `ResponseError` 实现）。

use std::collections::HashMap;
use std::sync::Arc;

use actix_web::http::Method;
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::{debug, info, warn};

use crate::api::constants::{ALLOW_HEADERS, ALLOW_METHODS, ALLOW_ORIGIN_ANY};
use crate::classify::TriviaPicker;
use crate::errors::IpscopeError;
use crate::services::geoip::GeoLookup;
use crate::services::report::compose_report;
use crate::utils::ip::{resolve_target_address, validate_address};

/// 查询接口共享状态（只读，除可选的种子随机源外无可变状态）
pub struct LookupState {
    pub geoip: Arc<dyn GeoLookup>,
    pub trivia: TriviaPicker,
}

impl LookupState {
    pub fn new(geoip: Arc<dyn GeoLookup>, trivia: TriviaPicker) -> Self {
        Self { geoip, trivia }
    }
}

pub struct LookupService;

impl LookupService {
    pub async fn lookup(
        req: HttpRequest,
        state: web::Data<LookupState>,
    ) -> Result<HttpResponse, IpscopeError> {
        let query = web::Query::<HashMap<String, String>>::from_query(req.query_string())
            .map(web::Query::into_inner)
            .unwrap_or_default();

        let target = resolve_target_address(query.get("ip").map(String::as_str), req.headers());

        let addr = validate_address(&target).inspect_err(|_| {
            debug!("Rejected malformed address: {:?}", target);
        })?;

        let record = state
            .geoip
            .lookup(addr.as_str())
            .await
            .inspect_err(|e| {
                warn!(
                    "Geolocation via {} failed for {}: {}",
                    state.geoip.name(),
                    addr,
                    e
                );
            })?
            .into_success()
            .inspect_err(|e| {
                debug!("Geolocation service rejected {}: {}", addr, e);
            })?;

        let report = compose_report(
            &addr,
            &record,
            chrono::Utc::now(),
            state.trivia.pick(),
            state.geoip.raw_url(addr.as_str()),
        );

        info!(
            "Lookup completed for {} ({}, {})",
            addr, report.summary.location, report.steps.ip_analysis.ip_class
        );

        Ok(HttpResponse::Ok().insert_header(ALLOW_ORIGIN_ANY).json(report))
    }

    /// CORS 预检：200，空响应体
    pub async fn preflight() -> HttpResponse {
        HttpResponse::Ok()
            .insert_header(ALLOW_ORIGIN_ANY)
            .insert_header(ALLOW_METHODS)
            .insert_header(ALLOW_HEADERS)
            .finish()
    }

    pub async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, IpscopeError> {
        debug!("Method {} not allowed on {}", req.method(), req.path());
        Err(IpscopeError::method_not_allowed(format!(
            "{} is not supported, only GET and OPTIONS requests are allowed",
            req.method()
        )))
    }
}

/// 查询接口路由
pub fn lookup_resource(path: &str) -> actix_web::Resource {
    web::resource(path)
        .route(web::get().to(LookupService::lookup))
        .route(web::method(Method::OPTIONS).to(LookupService::preflight))
        .default_service(web::to(LookupService::method_not_allowed))
}
