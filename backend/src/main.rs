//! Service entry-point: loads settings, wires the upstream client into the
//! domain service and serves the employee REST API.

mod server;

use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use employee_api::domain::EmployeeService;
use employee_api::inbound::http::state::HttpState;
use employee_api::outbound::upstream::HttpEmployeeUpstream;
use employee_api::settings::EmployeeApiSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = EmployeeApiSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let upstream_url = settings.upstream_url().map_err(std::io::Error::other)?;
    let upstream_timeout = settings.upstream_timeout().map_err(std::io::Error::other)?;

    let upstream = HttpEmployeeUpstream::new(upstream_url.clone(), upstream_timeout)
        .map_err(|e| std::io::Error::other(format!("failed to build upstream client: {e}")))?;
    let service = Arc::new(EmployeeService::new(Arc::new(upstream)));
    let http_state = web::Data::new(HttpState::new(service.clone(), service));

    info!(
        %bind_addr,
        upstream_url = %upstream_url,
        upstream_timeout_secs = upstream_timeout.as_secs(),
        "starting employee api"
    );
    create_server(http_state, ServerConfig::new(bind_addr))?.await
}
