use clinica::infrastructure;
use clinica::infrastructure::auth::JwtTokenVerifier;
use clinica::infrastructure::config::Settings;
use clinica::infrastructure::state::AppState;
use clinica::presentation;

use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use std::future::Future;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Ignore the error when a subscriber is already installed
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "clinica=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    let settings = Settings::from_env()?;

    run(settings, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

async fn run<F>(settings: Settings, shutdown_signal: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (listener, app) = bootstrap(&settings).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    Ok(())
}

async fn bootstrap(settings: &Settings) -> anyhow::Result<(tokio::net::TcpListener, axum::Router)> {
    let pool = infrastructure::db::create_pool(&settings.database).await?;

    infrastructure::db::migrate(&pool).await?;

    let token_verifier = Arc::new(JwtTokenVerifier::from_settings(&settings.oauth2)?);
    let state = AppState::new(pool, token_verifier, settings.page_size);
    let app = presentation::router::app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    Ok((listener, app))
}
