//! User endpoints.

use actix_web::{HttpResponse, web};

use super::user_id;
use crate::api::{
    ApiError, AppState, CreateUserBody, ProjectResponse, TaskResponse, UpdateUserBody,
    UserResponse,
};
use crate::user::{
    domain::UserRole,
    services::{RegisterUserRequest, UpdateUserRequest},
};

pub(super) async fn register(
    state: web::Data<AppState>,
    body: web::Json<CreateUserBody>,
) -> Result<HttpResponse, ApiError> {
    let CreateUserBody { name, email, role } = body.into_inner();
    let role_name = role.unwrap_or_else(|| UserRole::Member.as_str().to_owned());
    let user = state
        .users
        .register(RegisterUserRequest::new(name, email, role_name))
        .await?;
    Ok(HttpResponse::Created().json(UserResponse::from(&user)))
}

pub(super) async fn list(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let users = state.users.list().await?;
    let body: Vec<UserResponse> = users.iter().map(UserResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

pub(super) async fn get(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let user = state.users.get(user_id(path.into_inner())?).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(&user)))
}

pub(super) async fn update(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<UpdateUserBody>,
) -> Result<HttpResponse, ApiError> {
    let id = user_id(path.into_inner())?;
    let UpdateUserBody { name, email, role } = body.into_inner();

    let mut request = UpdateUserRequest::new();
    if let Some(value) = name {
        request = request.with_name(value);
    }
    if let Some(value) = email {
        request = request.with_email(value);
    }
    if let Some(value) = role {
        request = request.with_role(value);
    }

    let user = state.users.update(id, request).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(&user)))
}

pub(super) async fn projects(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let projects = state.projects.projects_of(user_id(path.into_inner())?).await?;
    let body: Vec<ProjectResponse> = projects.iter().map(ProjectResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

pub(super) async fn tasks(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let tasks = state.tasks.tasks_of(user_id(path.into_inner())?).await?;
    let body: Vec<TaskResponse> = tasks.iter().map(TaskResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}
