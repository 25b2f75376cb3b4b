//! Route table and request handlers.

mod projects;
mod tasks;
mod test_cases;
mod users;

use actix_web::{HttpResponse, web};

use super::ApiError;
use crate::project::domain::ProjectId;
use crate::task::domain::TaskId;
use crate::test_case::domain::TestCaseId;
use crate::user::domain::UserId;

/// Registers every route and the JSON/path extractor error handlers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::bad_request(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| ApiError::bad_request(err.to_string()).into()),
    )
    .route("/health", web::get().to(health))
    .service(
        web::scope("/testcase")
            .route("/generate", web::post().to(test_cases::generate))
            .route("/task/{task_id}", web::get().to(test_cases::list_for_task))
            .route("/{id}", web::get().to(test_cases::find)),
    )
    .service(
        web::scope("/api/tasks")
            .route("", web::post().to(tasks::create))
            .route("", web::get().to(tasks::list))
            .route("/byProject/{project_id}", web::get().to(tasks::list_by_project))
            .route("/{id}", web::get().to(tasks::get))
            .route("/{id}", web::put().to(tasks::update))
            .route("/{id}", web::delete().to(tasks::delete))
            .route("/{id}/status", web::put().to(tasks::update_status))
            .route("/{id}/assignees", web::get().to(tasks::assignees))
            .route("/{id}/assignees/{user_id}", web::post().to(tasks::assign)),
    )
    .service(
        web::scope("/api/projects")
            .route("", web::post().to(projects::create))
            .route("", web::get().to(projects::list))
            .route("/{id}", web::get().to(projects::get))
            .route("/{id}", web::put().to(projects::update))
            .route("/{id}", web::delete().to(projects::delete))
            .route("/{id}/team", web::get().to(projects::team))
            .route(
                "/{project_id}/add-member/{user_id}",
                web::post().to(projects::add_member),
            ),
    )
    .service(
        web::scope("/api/users")
            .route("", web::post().to(users::register))
            .route("", web::get().to(users::list))
            .route("/{id}", web::get().to(users::get))
            .route("/{id}", web::put().to(users::update))
            .route("/{id}/projects", web::get().to(users::projects))
            .route("/{id}/tasks", web::get().to(users::tasks)),
    );
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

fn task_id(raw: i64) -> Result<TaskId, ApiError> {
    TaskId::new(raw).map_err(|err| ApiError::bad_request(err.to_string()))
}

fn project_id(raw: i64) -> Result<ProjectId, ApiError> {
    ProjectId::new(raw).map_err(|err| ApiError::bad_request(err.to_string()))
}

fn user_id(raw: i64) -> Result<UserId, ApiError> {
    UserId::new(raw).map_err(|err| ApiError::bad_request(err.to_string()))
}

fn test_case_id(raw: i64) -> Result<TestCaseId, ApiError> {
    TestCaseId::new(raw).map_err(|err| ApiError::bad_request(err.to_string()))
}
