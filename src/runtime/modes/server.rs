//! Server mode
//!
//! This module contains the HTTP server startup logic.
//! It configures and starts the HTTP server with all necessary routes.

use actix_web::{
    App, HttpServer,
    middleware::{Compress, DefaultHeaders},
    web,
};
use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::api::middleware::RequestIdMiddleware;
use crate::api::services::{health_routes, lookup_resource};
use crate::config::AppConfig;
use crate::runtime::lifetime;

/// worker 数量上限
const MAX_WORKERS: usize = 32;

/// 注册路由
///
/// 查询接口挂在配置的路由上，同时挂在 `/`。
pub fn configure_routes(cfg: &mut web::ServiceConfig, route: &str) {
    cfg.service(health_routes()).service(lookup_resource(route));
    if route != "/" {
        cfg.service(lookup_resource("/"));
    }
}

/// Run the HTTP server
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server(config: &AppConfig) -> Result<()> {
    let startup = lifetime::prepare_server_startup(config);

    let lookup_state = startup.lookup_state.clone();
    let app_start_time = startup.app_start_time.clone();
    let route = startup.route.clone();

    let cpu_count = config.server.cpu_count.clamp(1, MAX_WORKERS);
    warn!("Using {} CPU cores for the server", cpu_count);

    let server = HttpServer::new(move || {
        let route = route.clone();
        App::new()
            .wrap(RequestIdMiddleware)
            .wrap(Compress::default())
            .wrap(
                DefaultHeaders::new()
                    .add(("Cache-Control", "no-cache, no-store, must-revalidate")),
            )
            .app_data(lookup_state.clone())
            .app_data(web::Data::new(app_start_time.clone()))
            .configure(move |cfg| configure_routes(cfg, &route))
    })
    .keep_alive(std::time::Duration::from_secs(30))
    .workers(cpu_count);

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    let server = server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    info!(
        "Starting server at http://{}{}",
        bind_address, config.server.route
    );

    server.run().await?;

    warn!("Server stopped");
    Ok(())
}
