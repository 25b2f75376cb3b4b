//! Task endpoints.

use actix_web::{HttpResponse, web};

use super::{project_id, task_id, user_id};
use crate::api::{
    ApiError, AppState, CreateTaskBody, TaskResponse, UpdateStatusBody, UpdateTaskBody,
    UserResponse,
};
use crate::task::{
    domain::Task,
    services::{CreateTaskRequest, UpdateTaskRequest},
};

fn task_list(tasks: &[Task]) -> Vec<TaskResponse> {
    tasks.iter().map(TaskResponse::from).collect()
}

pub(super) async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreateTaskBody>,
) -> Result<HttpResponse, ApiError> {
    let CreateTaskBody {
        project_id: raw_project_id,
        title,
        description,
        status,
        priority,
        labels,
        due_date,
    } = body.into_inner();

    let mut request = CreateTaskRequest::new(project_id(raw_project_id)?, title, description)
        .with_labels(labels);
    if let Some(value) = status {
        request = request.with_status(value);
    }
    if let Some(value) = priority {
        request = request.with_priority(value);
    }
    if let Some(value) = due_date {
        request = request.with_due_date(value);
    }

    let task = state.tasks.create(request).await?;
    Ok(HttpResponse::Created().json(TaskResponse::from(&task)))
}

pub(super) async fn list(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let tasks = state.tasks.list().await?;
    Ok(HttpResponse::Ok().json(task_list(&tasks)))
}

pub(super) async fn list_by_project(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let tasks = state
        .tasks
        .list_by_project(project_id(path.into_inner())?)
        .await?;
    Ok(HttpResponse::Ok().json(task_list(&tasks)))
}

pub(super) async fn get(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let task = state.tasks.get(task_id(path.into_inner())?).await?;
    Ok(HttpResponse::Ok().json(TaskResponse::from(&task)))
}

pub(super) async fn update(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<UpdateTaskBody>,
) -> Result<HttpResponse, ApiError> {
    let id = task_id(path.into_inner())?;
    let UpdateTaskBody {
        project_id: raw_project_id,
        title,
        description,
        status,
        priority,
        labels,
        due_date,
    } = body.into_inner();

    let mut request = UpdateTaskRequest::new();
    if let Some(raw) = raw_project_id {
        request = request.with_project(project_id(raw)?);
    }
    if let Some(value) = title {
        request = request.with_title(value);
    }
    if let Some(value) = description {
        request = request.with_description(value);
    }
    if let Some(value) = status {
        request = request.with_status(value);
    }
    if let Some(value) = priority {
        request = request.with_priority(value);
    }
    if let Some(value) = labels {
        request = request.with_labels(value);
    }
    if let Some(value) = due_date {
        request = request.with_due_date(value);
    }

    let task = state.tasks.update(id, request).await?;
    Ok(HttpResponse::Ok().json(TaskResponse::from(&task)))
}

pub(super) async fn update_status(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<UpdateStatusBody>,
) -> Result<HttpResponse, ApiError> {
    let task = state
        .tasks
        .update_status(task_id(path.into_inner())?, &body.status)
        .await?;
    Ok(HttpResponse::Ok().json(TaskResponse::from(&task)))
}

pub(super) async fn delete(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    state.tasks.delete(task_id(path.into_inner())?).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub(super) async fn assign(
    state: web::Data<AppState>,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse, ApiError> {
    let (raw_task_id, raw_user_id) = path.into_inner();
    state
        .tasks
        .assign(task_id(raw_task_id)?, user_id(raw_user_id)?)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

pub(super) async fn assignees(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let users = state.tasks.assignees_of(task_id(path.into_inner())?).await?;
    let body: Vec<UserResponse> = users.iter().map(UserResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}
