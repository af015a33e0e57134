use crate::config::BatchConfig;
use crate::counter;
use crate::fetch::{self, ProjectTask};
use crate::metrics_defs::{PROJECT_FETCH_FAILURES, RELEASES_REQUESTS, TASKS_REQUESTS};
use crate::{classify, ordering, upcoming};
use asana::types::Project;
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Error message kept byte-for-byte compatible with the previous deployment,
/// which read its credentials from ambient environment variables.
pub const MISSING_CREDENTIALS_ERROR: &str = "Missing environment variables";

/// State handed to every handler. Built once at startup, read-only after.
#[derive(Clone)]
pub struct AppState {
    client: Option<Arc<asana::Client>>,
    batch: BatchConfig,
}

impl AppState {
    /// The client is only constructed when both credentials are present;
    /// otherwise every request is answered with the configuration error.
    pub fn new(asana: &asana::Config, batch: BatchConfig) -> Self {
        let client = asana
            .credentials()
            .map(|credentials| Arc::new(asana::Client::new(&asana.base_url, credentials)));

        AppState { client, batch }
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        .route("/releases", get(list_releases))
        .route("/tasks", get(list_upcoming_tasks))
        .layer(cors)
        .with_state(state)
}

#[derive(Serialize)]
struct ReleasesResponse {
    success: bool,
    projects: Vec<Project>,
    count: usize,
    timestamp: DateTime<Utc>,
}

impl IntoResponse for ReleasesResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[derive(Serialize)]
struct TasksResponse {
    success: bool,
    tasks: Vec<ProjectTask>,
    count: usize,
    projects_processed: usize,
    timestamp: DateTime<Utc>,
}

impl IntoResponse for TasksResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    fn new(error: impl Into<String>) -> Self {
        ErrorResponse {
            success: false,
            error: error.into(),
            timestamp: Utc::now(),
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(self)).into_response()
    }
}

async fn list_releases(
    State(state): State<AppState>,
) -> Result<ReleasesResponse, ErrorResponse> {
    counter!(RELEASES_REQUESTS).increment(1);

    let Some(client) = &state.client else {
        tracing::error!("Asana credentials missing, refusing request");
        return Err(ErrorResponse::new(MISSING_CREDENTIALS_ERROR));
    };

    let projects = client.workspace_projects().await.map_err(|e| {
        tracing::error!(error = %e, "workspace project fetch failed");
        counter!(PROJECT_FETCH_FAILURES).increment(1);
        ErrorResponse::new(e.to_string())
    })?;

    let mut releases: Vec<Project> = projects
        .into_iter()
        .filter(classify::is_release_project)
        .collect();
    ordering::sort_projects_by_due(&mut releases);

    Ok(ReleasesResponse {
        success: true,
        count: releases.len(),
        projects: releases,
        timestamp: Utc::now(),
    })
}

async fn list_upcoming_tasks(
    State(state): State<AppState>,
) -> Result<TasksResponse, ErrorResponse> {
    counter!(TASKS_REQUESTS).increment(1);

    let Some(client) = &state.client else {
        tracing::error!("Asana credentials missing, refusing request");
        return Err(ErrorResponse::new(MISSING_CREDENTIALS_ERROR));
    };

    let projects = client.workspace_projects().await.map_err(|e| {
        tracing::error!(error = %e, "workspace project fetch failed");
        counter!(PROJECT_FETCH_FAILURES).increment(1);
        ErrorResponse::new(e.to_string())
    })?;

    let releases: Vec<Project> = projects
        .into_iter()
        .filter(classify::is_release_project)
        .collect();
    let projects_processed = releases.len();

    let mut tasks = fetch::release_tasks(client.clone(), releases, &state.batch).await;

    // The window is anchored to the moment this handler runs.
    let today = Utc::now().date_naive();
    tasks.retain(|t| upcoming::is_upcoming(&t.task, today));
    ordering::sort_tasks_by_due(&mut tasks);

    Ok(TasksResponse {
        success: true,
        count: tasks.len(),
        tasks,
        projects_processed,
        timestamp: Utc::now(),
    })
}
