mod config;
mod contact;
mod errors;
mod form;
mod mailer;
mod projects;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::contact::relay::ContactRelay;
use crate::mailer::HttpMailer;
use crate::projects::catalog::ProjectCatalog;
use crate::projects::views::{MemoryViewCounter, RedisViewCounter, ViewCounter};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio API v{}", env!("CARGO_PKG_VERSION"));

    if config.recipient_email.is_none() {
        warn!("RECIPIENT_EMAIL is not set; recruiter contact requests will fail");
    }

    let mailer = HttpMailer::new(
        config.mail_api_url.clone(),
        config.email_pass.clone(),
        Duration::from_secs(config.mail_timeout_secs),
    )
    .context("Failed to build mail HTTP client")?;
    info!("Mail transport initialized ({})", config.mail_api_url);

    let relay = ContactRelay::new(config.contact(), Arc::new(mailer));

    let views: Arc<dyn ViewCounter> = match &config.redis_url {
        Some(url) => Arc::new(RedisViewCounter::connect(url).await?),
        None => {
            warn!("REDIS_URL is not set; page views are kept in memory");
            Arc::new(MemoryViewCounter::default())
        }
    };

    let projects = Arc::new(ProjectCatalog::load(&config.projects_manifest)?);

    let state = AppState {
        relay,
        projects,
        views,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
