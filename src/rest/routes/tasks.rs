// rest/routes/tasks.rs — Task CRUD routes.
//
// The only validation authority in the system: the store trusts whatever
// reaches it, so every title/shape check happens here.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::rest::error::ApiError;
use crate::store::{NewTask, Task, TaskPatch, TaskPriority, TaskStatus};
use crate::AppContext;

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    // Option so that a missing title yields the dedicated 400 message
    // instead of a generic deserialization failure.
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
}

pub async fn list_tasks(State(ctx): State<Arc<AppContext>>) -> Json<Vec<Task>> {
    Json(ctx.store.list().await)
}

pub async fn get_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Result<Json<Task>, ApiError> {
    ctx.store
        .get(&id)
        .await
        .map(Json)
        .ok_or(ApiError::TaskNotFound)
}

pub async fn create_task(
    State(ctx): State<Arc<AppContext>>,
    body: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let Json(body) = body.map_err(|_| ApiError::InvalidBody)?;

    let title = body.title.as_deref().map(str::trim).unwrap_or_default();
    if title.is_empty() {
        return Err(ApiError::TitleRequired);
    }

    let task = ctx
        .store
        .create(NewTask {
            title: title.to_string(),
            description: body.description,
            status: body.status,
            priority: body.priority,
        })
        .await;

    info!(id = %task.id, "task created");
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn update_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
    body: Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> Result<Json<Task>, ApiError> {
    let Json(body) = body.map_err(|_| ApiError::InvalidBody)?;

    // An absent title means "leave unchanged"; a supplied blank one is an error.
    let title = match body.title.as_deref().map(str::trim) {
        Some("") => return Err(ApiError::TitleEmpty),
        Some(trimmed) => Some(trimmed.to_string()),
        None => None,
    };

    let patch = TaskPatch {
        title,
        description: body.description,
        status: body.status,
        priority: body.priority,
    };

    match ctx.store.update(&id, patch).await {
        Some(task) => {
            info!(id = %task.id, "task updated");
            Ok(Json(task))
        }
        None => Err(ApiError::TaskNotFound),
    }
}

pub async fn delete_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if ctx.store.delete(&id).await {
        info!(id = %id, "task deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::TaskNotFound)
    }
}
