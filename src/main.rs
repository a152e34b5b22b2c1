mod config;
mod engine;
mod telemetry;

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{debug_handler, Json, Router};
use lib::decode_state;
use lib::wire::{InfoResponse, MoveResponse};
use tracing::{info, warn};

use crate::config::Config;
use crate::engine::Engine;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

struct AppState {
    engine: Engine,
    info: InfoResponse,
}

#[debug_handler]
async fn get_move(State(app): State<Arc<AppState>>, body: String) -> Json<MoveResponse> {
    Json(app.engine.respond(body))
}

async fn info(State(app): State<Arc<AppState>>) -> Json<InfoResponse> {
    Json(app.info.clone())
}

async fn start(body: String) -> StatusCode {
    match decode_state(body) {
        Ok(state) => info!(
            game_id = %state.game.id,
            "Game started with {} snakes",
            state.board.snakes.len()
        ),
        Err(err) => warn!("unreadable /start body: {err}"),
    }
    StatusCode::OK
}

async fn end(body: String) -> StatusCode {
    match decode_state(body) {
        Ok(state) => {
            let survived = state.board.snakes.iter().any(|s| s.id == state.you.id);
            info!(game_id = %state.game.id, turn = state.turn, survived, "Game over");
        }
        Err(err) => warn!("unreadable /end body: {err}"),
    }
    StatusCode::OK
}

fn router(app: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(info))
        .route("/move", post(get_move))
        .route("/info", get(info))
        .route("/start", post(start))
        .route("/end", post(end))
        .with_state(app)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {err}");
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    let _sentry = telemetry::init(&config)?;

    let engine = Engine::new(config.agent.create_agent());
    info!("Hello Snakes! Playing with the {} agent", engine.agent_name());
    let app = Arc::new(AppState {
        engine,
        info: config.info(),
    });

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, router(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
