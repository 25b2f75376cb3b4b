//! Project endpoints.

use actix_web::{HttpResponse, web};

use super::{project_id, user_id};
use crate::api::{
    ApiError, AppState, CreateProjectBody, ProjectResponse, UpdateProjectBody, UserResponse,
};
use crate::project::services::{CreateProjectRequest, UpdateProjectRequest};

pub(super) async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreateProjectBody>,
) -> Result<HttpResponse, ApiError> {
    let CreateProjectBody {
        name,
        description,
        status,
        progress,
        start_date,
        end_date,
    } = body.into_inner();

    let mut request = CreateProjectRequest::new(name, description, start_date);
    if let Some(value) = status {
        request = request.with_status(value);
    }
    if let Some(value) = progress {
        request = request.with_progress(value);
    }
    if let Some(value) = end_date {
        request = request.with_end_date(value);
    }

    let project = state.projects.create(request).await?;
    Ok(HttpResponse::Created().json(ProjectResponse::from(&project)))
}

pub(super) async fn list(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let projects = state.projects.list().await?;
    let body: Vec<ProjectResponse> = projects.iter().map(ProjectResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

pub(super) async fn get(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let project = state.projects.get(project_id(path.into_inner())?).await?;
    Ok(HttpResponse::Ok().json(ProjectResponse::from(&project)))
}

pub(super) async fn update(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<UpdateProjectBody>,
) -> Result<HttpResponse, ApiError> {
    let id = project_id(path.into_inner())?;
    let UpdateProjectBody {
        name,
        description,
        status,
        progress,
        start_date,
        end_date,
        user_id_to_add,
    } = body.into_inner();

    let mut request = UpdateProjectRequest::new();
    if let Some(value) = name {
        request = request.with_name(value);
    }
    if let Some(value) = description {
        request = request.with_description(value);
    }
    if let Some(value) = status {
        request = request.with_status(value);
    }
    if let Some(value) = progress {
        request = request.with_progress(value);
    }
    if let Some(value) = start_date {
        request = request.with_start_date(value);
    }
    if let Some(value) = end_date {
        request = request.with_end_date(value);
    }
    if let Some(raw) = user_id_to_add {
        request = request.with_user_to_add(user_id(raw)?);
    }

    let project = state.projects.update(id, request).await?;
    Ok(HttpResponse::Ok().json(ProjectResponse::from(&project)))
}

pub(super) async fn delete(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    state.projects.delete(project_id(path.into_inner())?).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub(super) async fn add_member(
    state: web::Data<AppState>,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse, ApiError> {
    let (raw_project_id, raw_user_id) = path.into_inner();
    state
        .projects
        .add_member(project_id(raw_project_id)?, user_id(raw_user_id)?)
        .await?;
    Ok(HttpResponse::Ok().finish())
}

pub(super) async fn team(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let members = state
        .projects
        .members_of(project_id(path.into_inner())?)
        .await?;
    let body: Vec<UserResponse> = members.iter().map(UserResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}
