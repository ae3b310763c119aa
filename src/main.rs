use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tracing::info;

use text_assist_backend::config::Config;
use text_assist_backend::routes;
use text_assist_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "text_assist_backend=debug,tower_http=debug".into()),
        )
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let state = Arc::new(AppState::new(&config));

    // The browser extension calls us cross-origin.
    let cors = CorsLayer::very_permissive();

    let app = routes::create_router().with_state(state).layer(cors);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(model = %config.model, "text-assist backend running at http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
