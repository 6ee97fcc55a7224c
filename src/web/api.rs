use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::Utc;
use log::{debug, info};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;
use uuid::Uuid;

use crate::description::GraphDescription;
use crate::render::{render_dot, render_report};
use crate::web::models::*;
use crate::{Error, ErrorKind};

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Past solutions, evicted oldest first once full
#[derive(Debug)]
pub struct SolutionStore {
    entries: HashMap<Uuid, SolveResponse>,
    order: VecDeque<Uuid>,
    capacity: usize,
}

impl SolutionStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn insert(&mut self, solution: SolveResponse) {
        while self.order.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            }
        }
        self.order.push_back(solution.solution_id);
        self.entries.insert(solution.solution_id, solution);
    }

    pub fn get(&self, id: &Uuid) -> Option<&SolveResponse> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub solutions: Arc<Mutex<SolutionStore>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_capacity(1000)
    }

    pub fn with_capacity(max_solutions: usize) -> Self {
        Self {
            solutions: Arc::new(Mutex::new(SolutionStore::new(max_solutions))),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/solve", post(solve))
        .route("/api/solutions/:solution_id", get(get_solution))
        .route("/api/health", get(health_check))
}

/// Build the posted graph and compute shortest paths from its start vertex
pub async fn solve(
    State(state): State<AppState>,
    Json(request): Json<GraphDescription>,
) -> Result<Json<SolveResponse>, ApiError> {
    let start = request.start.clone().ok_or_else(|| error_response(Error::MissingStart))?;
    let mut engine = request.build().map_err(error_response)?;

    let started = Instant::now();
    engine.run(&start).map_err(error_response)?;
    let execution_time = started.elapsed();

    let graph = WebGraph::from_engine(&engine).map_err(error_response)?;
    let response = SolveResponse {
        solution_id: Uuid::new_v4(),
        computed_at: Utc::now(),
        start,
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
        reachable: graph.nodes.iter().filter(|n| n.distance.is_some()).count(),
        report: render_report(&engine).map_err(error_response)?,
        dot: render_dot(&engine).map_err(error_response)?,
        graph,
    };
    info!(
        "Solved {} vertices from {} in {:.3} ms",
        response.graph.nodes.len(),
        response.start,
        response.execution_time_ms
    );

    state
        .solutions
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(response.clone());

    Ok(Json(response))
}

/// Fetch a previously computed solution
pub async fn get_solution(
    State(state): State<AppState>,
    Path(solution_id): Path<Uuid>,
) -> Result<Json<SolveResponse>, ApiError> {
    let solutions = state.solutions.lock().unwrap_or_else(PoisonError::into_inner);

    match solutions.get(&solution_id) {
        Some(solution) => Ok(Json(solution.clone())),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "solution_not_found".to_string(),
                message: format!("Solution {} not found", solution_id),
                details: None,
            }),
        )),
    }
}

/// Health check
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let solutions_stored = state
        .solutions
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .len();
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        solutions_stored,
    })
}

/// Maps a library error onto an HTTP status and error body
pub fn error_response(err: Error) -> ApiError {
    let (status, error) = match err.kind() {
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, "not_found"),
        ErrorKind::InvalidArgument => (StatusCode::BAD_REQUEST, "invalid_argument"),
        ErrorKind::InvalidState => (StatusCode::CONFLICT, "invalid_state"),
        ErrorKind::Input => (StatusCode::BAD_REQUEST, "invalid_input"),
    };
    debug!("Request failed with {}: {}", error, err);
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message: err.to_string(),
            details: None,
        }),
    )
}
