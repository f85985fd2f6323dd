mod config;
mod error;
mod routes;
mod state;

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::state::AppState;

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "allumettes failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    let content = site::content::load()?;
    tracing::info!(
        brand = %content.brand.name,
        news = content.news.len(),
        gallery = content.gallery.len(),
        reviews = content.reviews.len(),
        "content document loaded"
    );

    let addr = config.addr();
    let state = AppState::new(content, config);
    let app = routes::app(state)?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "allumettes listening");
    axum::serve(listener, app).await?;
    Ok(())
}
