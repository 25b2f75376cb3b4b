//! Generation relay endpoints.

use actix_web::{HttpResponse, web};

use super::{task_id, test_case_id};
use crate::api::{
    ApiError, AppState, GenerateTestCaseBody, GenerateTestCaseResponse, TestCaseResponse,
};

pub(super) async fn generate(
    state: web::Data<AppState>,
    body: web::Json<GenerateTestCaseBody>,
) -> Result<HttpResponse, ApiError> {
    let stored = state.test_cases.generate(body.project_task_id).await?;
    Ok(HttpResponse::Ok().json(GenerateTestCaseResponse::from(stored)))
}

pub(super) async fn list_for_task(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let test_cases = state
        .test_cases
        .list_for_task(task_id(path.into_inner())?)
        .await?;
    let body: Vec<TestCaseResponse> = test_cases.iter().map(TestCaseResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

pub(super) async fn find(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let test_case = state.test_cases.find(test_case_id(path.into_inner())?).await?;
    Ok(HttpResponse::Ok().json(TestCaseResponse::from(&test_case)))
}
