use axum::{Extension, Router, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use time_tracking::shared::core::clock::SystemClock;
use time_tracking::shared::infrastructure::email::EmailSender;
use time_tracking::shared::infrastructure::email::logging::LoggingEmailSender;
use time_tracking::shared::infrastructure::email::resend::ResendEmailSender;
use time_tracking::shell::config::{AppConfig, EmailConfig};
use time_tracking::shell::graphql::{build_schema, graphiql, graphql};
use time_tracking::shell::http::router;
use time_tracking::shell::state::{AppState, Stores};
use time_tracking::shell::workers::spawn_reminder_worker;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;

    let email: Arc<dyn EmailSender> = match &config.email {
        EmailConfig::Resend {
            api_key,
            from,
            base_url,
        } => Arc::new(ResendEmailSender::new(base_url, api_key, from)),
        EmailConfig::LogOnly => {
            tracing::warn!("RESEND_API_KEY not set, reminders will only be logged");
            Arc::new(LoggingEmailSender)
        }
    };

    // In-memory stores for now
    let stores = Stores::new();
    let clock = Arc::new(SystemClock::new(config.utc_offset));
    let state = AppState::new(&stores, clock, email);

    spawn_reminder_worker(state.run_reminder_tick.clone(), config.tick_interval);

    let schema = build_schema(state.clone());
    let app = Router::new()
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .merge(router(state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    tracing::info!("HTTP API on http://{}, GraphQL on /gql", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
