//! HTTP routes for workout generation and logging.
//!
//! - POST /generate-workout: build a session for a request
//! - POST /log-workout: print a summary of a completed workout
//! - POST /reshuffle-exercise: swap one exercise for a similar one
//! - GET /health: liveness and catalog size

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use liftplan_core::config::ServerConfig;
use liftplan_core::{
    Catalog, ExerciseOut, ReshuffleRequest, Result, TrainingConfig, WorkoutLog, WorkoutRequest,
    LOG_ACK_MESSAGE,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared state for all handlers
///
/// The catalog is never mutated after startup. The random source is
/// process-wide; seeding it makes responses reproducible.
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub training: TrainingConfig,
    rng: Mutex<StdRng>,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>, training: TrainingConfig) -> Self {
        let rng = match training.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            catalog,
            training,
            rng: Mutex::new(rng),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        // A panic while sampling cannot leave the generator in a bad state
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut rng)
    }
}

/// Build the router over shared state
pub fn router(state: Arc<AppState>, cors_allow_any: bool) -> Router {
    let mut app = Router::new()
        .route("/generate-workout", post(handle_generate))
        .route("/log-workout", post(handle_log))
        .route("/reshuffle-exercise", post(handle_reshuffle))
        .route("/health", get(handle_health))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if cors_allow_any {
        app = app.layer(CorsLayer::permissive());
    }

    app
}

/// Serve the API until Ctrl+C
pub async fn serve(state: Arc<AppState>, config: &ServerConfig) -> Result<()> {
    let app = router(state, config.cors_allow_any);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", err);
        return;
    }
    tracing::info!("Ctrl+C received, shutting down...");
}

/// GET /health
async fn handle_health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({ "status": "ok", "exercises": state.catalog.len() }))
}

/// POST /generate-workout
async fn handle_generate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<WorkoutRequest>,
) -> Json<Vec<ExerciseOut>> {
    let today = state.training.today();
    let session = state.with_rng(|rng| {
        liftplan_core::generate_workout(&state.catalog, &request, &state.training, today, rng)
    });
    Json(session)
}

/// POST /log-workout
async fn handle_log(Json(log): Json<WorkoutLog>) -> Json<Value> {
    tracing::info!(
        "Received workout log from {} with {} exercises",
        log.user_id,
        log.exercises.len()
    );
    print!("{}", liftplan_core::summarize(&log));
    Json(json!({ "message": LOG_ACK_MESSAGE }))
}

/// POST /reshuffle-exercise
async fn handle_reshuffle(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ReshuffleRequest>,
) -> std::result::Result<Json<ExerciseOut>, (StatusCode, Json<Value>)> {
    let exercise = state.with_rng(|rng| {
        liftplan_core::reshuffle_exercise(&state.catalog, &request, &state.training, rng)
    });

    exercise.map(Json).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "detail": "No suitable alternatives found." })),
        )
    })
}
