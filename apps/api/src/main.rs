mod accounts;
mod catalog;
mod config;
mod errors;
mod news;
mod quiz;
mod roadmap;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::accounts::session::SessionManager;
use crate::accounts::store::UserStore;
use crate::catalog::store::CollegeStore;
use crate::config::Config;
use crate::news::NewsClient;
use crate::quiz::models::QuizBook;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("compass_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Compass API v{}", env!("CARGO_PKG_VERSION"));

    // Flat-table stores; each operation re-reads its backing file
    let users = UserStore::new(config.users_csv.clone());
    let colleges = CollegeStore::new(config.colleges_csv.clone());
    info!(
        "User table at {}, college table at {}",
        config.users_csv.display(),
        config.colleges_csv.display()
    );

    // Quiz definitions, loaded once
    let quiz = Arc::new(QuizBook::load(&config.quiz_file));
    info!(
        "Quiz loaded: {} main questions, {} specialization pools",
        quiz.main.len(),
        quiz.sub.len()
    );

    // News search backend
    let news = Arc::new(NewsClient::new(
        config.news_base_url.clone(),
        config.news_api_key.clone(),
    ));
    info!("News client initialized ({})", config.news_base_url);

    // Build app state
    let state = AppState {
        users,
        colleges,
        quiz,
        news,
        sessions: SessionManager::new(),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
