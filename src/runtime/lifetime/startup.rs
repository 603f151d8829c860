use std::sync::Arc;

use actix_web::web;
use tracing::{debug, info};

use crate::api::services::{AppStartTime, LookupState};
use crate::classify::TriviaPicker;
use crate::config::AppConfig;
use crate::services::geoip::{ExternalApiProvider, GeoLookup};

/// 服务器启动所需的共享组件，所有 worker 共用一份
pub struct StartupContext {
    pub lookup_state: web::Data<LookupState>,
    pub app_start_time: AppStartTime,
    pub route: String,
}

/// 准备服务器启动的上下文
pub fn prepare_server_startup(config: &AppConfig) -> StartupContext {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let geoip: Arc<dyn GeoLookup> = Arc::new(ExternalApiProvider::from_config(&config.geoip));
    info!("Using geolocation provider: {}", geoip.name());

    match config.geoip.timeout_secs {
        Some(secs) => debug!("Upstream timeout: {}s", secs),
        None => debug!("Upstream timeout: none"),
    }

    let trivia = TriviaPicker::new(config.trivia.seed);
    if let Some(seed) = config.trivia.seed {
        info!("Trivia selection seeded with {}", seed);
    }

    let context = StartupContext {
        lookup_state: web::Data::new(LookupState::new(geoip, trivia)),
        app_start_time: AppStartTime::now(),
        route: config.server.route.clone(),
    };

    debug!(
        "Pre-startup processing completed in {} ms",
        start_time.elapsed().as_millis()
    );
    context
}
