use askama::Template;
use axum::{
    Form, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::task::{Task, TaskService, TaskServiceError};

#[derive(Debug, Deserialize)]
pub struct TaskForm {
    content: String,
}

/// Custom error type for task handler operations.
#[derive(Debug, thiserror::Error)]
enum TaskError {
    /// Represents an error during template rendering.
    #[error("Template rendering failed: {0}")]
    Template(#[from] askama::Error),
    /// Represents a referenced task that does not exist.
    #[error("Task with ID {0} not found")]
    NotFound(u32),
    /// Represents a task service error.
    #[error(transparent)]
    Service(TaskServiceError),
}

impl From<TaskServiceError> for TaskError {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::TaskNotFound(id) => TaskError::NotFound(id),
            other => TaskError::Service(other),
        }
    }
}

impl IntoResponse for TaskError {
    fn into_response(self) -> Response {
        match self {
            TaskError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("Task with ID {} not found", id),
            )
                .into_response(),
            // Store and rendering failures surface the underlying
            // description; no redirect is issued.
            other => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("ERROR: {}", other),
            )
                .into_response(),
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    tasks: Vec<Task>,
}

impl IndexTemplate {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

#[derive(Template)]
#[template(path = "edit.html")]
struct EditTemplate {
    task: Task,
}

impl EditTemplate {
    pub fn new(task: Task) -> Self {
        Self { task }
    }
}

#[derive(Clone, Debug)]
pub struct TaskState {
    pub db: Arc<sea_orm::DatabaseConnection>,
}

/// The contract pins creation, update, and deletion to a 302 back to the
/// index; axum's `Redirect` only offers 303/307/308, so the response is
/// built directly.
fn redirect_to_index() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response()
}

/// Handler for GET / that renders the index page listing all tasks,
/// ordered by creation time.
#[tracing::instrument(skip(state))]
async fn index_handler(State(state): State<TaskState>) -> Result<Html<String>, TaskError> {
    let task_service = TaskService::new(&state.db);
    let tasks = task_service.get_all_tasks().await?;
    let template = IndexTemplate::new(tasks);
    template.render().map(Html).map_err(TaskError::from)
}

/// Handler for POST / that creates a new task and redirects to the index.
#[tracing::instrument(skip(state))]
async fn create_task_handler(
    State(state): State<TaskState>,
    Form(form): Form<TaskForm>,
) -> Result<Response, TaskError> {
    let task_service = TaskService::new(&state.db);
    task_service.create_task(form.content).await?;
    Ok(redirect_to_index())
}

/// Handler for GET /delete/{id} that deletes a task and redirects to the
/// index. A nonexistent ID is a 404 and nothing is deleted.
#[tracing::instrument(skip(state))]
async fn delete_task_handler(
    State(state): State<TaskState>,
    Path(id): Path<u32>,
) -> Result<Response, TaskError> {
    let task_service = TaskService::new(&state.db);
    task_service.delete_task_by_id(id).await?;
    Ok(redirect_to_index())
}

/// Handler for GET /update/{id} that renders the edit form pre-populated
/// with the task's current content.
#[tracing::instrument(skip(state))]
async fn edit_task_form_handler(
    State(state): State<TaskState>,
    Path(id): Path<u32>,
) -> Result<Html<String>, TaskError> {
    let task_service = TaskService::new(&state.db);
    let task = task_service.get_task_by_id(id).await?;
    let template = EditTemplate::new(task);
    template.render().map(Html).map_err(TaskError::from)
}

/// Handler for POST /update/{id} that overwrites a task's content and
/// redirects to the index.
#[tracing::instrument(skip(state))]
async fn update_task_handler(
    State(state): State<TaskState>,
    Path(id): Path<u32>,
    Form(form): Form<TaskForm>,
) -> Result<Response, TaskError> {
    let task_service = TaskService::new(&state.db);
    task_service.edit_task_by_id(id, form.content).await?;
    Ok(redirect_to_index())
}

/// Creates and returns the task router with all task-related routes.
pub fn create_task_router(state: TaskState) -> Router {
    Router::new()
        .route("/", get(index_handler).post(create_task_handler))
        .route("/delete/{id}", get(delete_task_handler))
        .route(
            "/update/{id}",
            get(edit_task_form_handler).post(update_task_handler),
        )
        .with_state(state)
}
