//! Gateway entry-point: wires the REST surface, upstream adapter, and docs.

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use spektr_gateway::ApiDoc;
use spektr_gateway::config::GatewayConfig;
use spektr_gateway::domain::token::TokenCipher;
use spektr_gateway::domain::{AuthService, NotificationService, ProfileService, RepairService};
use spektr_gateway::inbound::http::{self, state::HttpState};
use spektr_gateway::middleware::{Cors, Trace};
use spektr_gateway::outbound::spektr::SpektrClient;

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

    let config = GatewayConfig::from_env().map_err(std::io::Error::other)?;
    let cipher = TokenCipher::new(config.token_key.clone()).map_err(std::io::Error::other)?;
    let upstream = Arc::new(
        SpektrClient::new(config.upstream_base_url.clone(), config.upstream_timeout)
            .map_err(std::io::Error::other)?,
    );

    let state = web::Data::new(HttpState::new(
        AuthService::new(upstream.clone(), cipher.clone()),
        ProfileService::new(upstream.clone(), cipher.clone()),
        NotificationService::new(upstream.clone(), cipher.clone()),
        RepairService::new(upstream, cipher),
    ));

    info!(
        addr = %config.bind_addr,
        upstream = %config.upstream_base_url,
        "starting gateway"
    );
    HttpServer::new(move || {
        let app = App::new()
            .app_data(state.clone())
            .wrap(Trace)
            .wrap(Cors)
            .configure(http::configure);
        #[cfg(debug_assertions)]
        let app =
            app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
        app
    })
    .bind(config.bind_addr)?
    .run()
    .await
}
