//! HTTP API server for integration with other systems.
//!
//! Provides REST endpoints for availability queries, bookings, and
//! natural-language questions. Unknown dates, invalid slots, and occupied
//! slots come back as 200 responses carrying the tagged report; only
//! genuine failures map to 5xx.

use crate::agent::{Agent, ToolContext};
use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use crate::schedule::{MemoryScheduleStore, Schedule, ScheduleStore};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Shared application state.
struct AppState {
    store: Arc<MemoryScheduleStore>,
    settings: Settings,
}

/// Run the HTTP API server.
pub async fn run_serve(host: &str, port: u16, settings: Settings) -> anyhow::Result<()> {
    let schedule = Schedule::load(&settings.schedule)?;
    let store = Arc::new(MemoryScheduleStore::new(schedule));

    let state = Arc::new(AppState { store, settings });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health))
        .route("/availability/{date}", get(availability))
        .route("/book", post(book))
        .route("/ask", post(ask))
        .layer(cors)
        .with_state(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    Output::header("Ledig API Server");
    println!();
    Output::success(&format!("Listening on http://{}", addr));
    println!();
    println!("Endpoints:");
    Output::kv("Health", "GET  /health");
    Output::kv("Availability", "GET  /availability/:date");
    Output::kv("Book", "POST /book");
    Output::kv("Ask (agent)", "POST /ask");
    println!();
    Output::info("Press Ctrl+C to stop the server.");

    axum::serve(listener, app).await?;

    Ok(())
}

// === Request/Response Types ===

#[derive(Deserialize)]
struct BookRequest {
    date: String,
    start_time: String,
    end_time: String,
    reservation_name: String,
}

#[derive(Deserialize)]
struct AskRequest {
    question: String,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    model: Option<String>,
}

#[derive(Serialize)]
struct AskResponse {
    answer: String,
    tool_calls: usize,
    iterations: usize,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

// === Handlers ===

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn availability(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
) -> impl IntoResponse {
    match state.store.list_availabilities(&date).await {
        Ok(report) => Json(report).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}

async fn book(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BookRequest>,
) -> impl IntoResponse {
    match state
        .store
        .book_slot(
            &req.date,
            &req.start_time,
            &req.end_time,
            &req.reservation_name,
        )
        .await
    {
        Ok(report) => Json(report).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}

async fn ask(State(state): State<Arc<AppState>>, Json(req): Json<AskRequest>) -> impl IntoResponse {
    if let Err(e) = preflight::check(Operation::Ask) {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response();
    }

    let model = req
        .model
        .unwrap_or_else(|| state.settings.agent.model.clone());

    let context = req.date.as_ref().map(|d| format!("Focus on date: {}", d));

    let tool_context = ToolContext::new(state.store.clone());
    let agent = Agent::new(tool_context, &model)
        .with_max_iterations(state.settings.agent.max_iterations);

    match agent.run(&req.question, context.as_deref()).await {
        Ok(response) => Json(AskResponse {
            answer: response.content,
            tool_calls: response.tool_calls.len(),
            iterations: response.iterations,
        })
        .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}
