//! Status-code mapping tests for API errors.

use actix_web::{ResponseError, body::to_bytes, http::StatusCode};
use rstest::rstest;

use crate::api::{ApiError, ErrorBody};
use crate::project::domain::ProjectId;
use crate::task::{
    domain::{TaskDomainError, TaskId},
    ports::TaskRepositoryError,
    services::TaskServiceError,
};
use crate::test_case::{domain::TestCaseId, services::TestCaseServiceError};
use crate::user::{
    domain::{EmailAddress, UserId},
    ports::UserRepositoryError,
    services::UserDirectoryError,
};

fn task(raw: i64) -> TaskId {
    TaskId::new(raw).expect("valid task id")
}

#[rstest]
#[case(TestCaseServiceError::InvalidRequest("bad id".to_owned()), StatusCode::BAD_REQUEST)]
#[case(TestCaseServiceError::TaskNotFound(task(4)), StatusCode::NOT_FOUND)]
#[case(
    TestCaseServiceError::TestCaseNotFound(TestCaseId::new(2).expect("valid id")),
    StatusCode::NOT_FOUND
)]
#[case(
    TestCaseServiceError::UpstreamUnavailable("refused".to_owned()),
    StatusCode::INTERNAL_SERVER_ERROR
)]
#[case(
    TestCaseServiceError::UpstreamInvalidResponse("empty".to_owned()),
    StatusCode::INTERNAL_SERVER_ERROR
)]
#[case(
    TestCaseServiceError::Storage(
        crate::test_case::ports::TestCaseRepositoryError::persistence(std::io::Error::other("down"))
    ),
    StatusCode::INTERNAL_SERVER_ERROR
)]
fn generation_errors_map_to_status(#[case] err: TestCaseServiceError, #[case] expected: StatusCode) {
    assert_eq!(ApiError::from(err).status(), expected);
}

#[rstest]
#[case(TaskServiceError::Domain(TaskDomainError::EmptyTitle), StatusCode::BAD_REQUEST)]
#[case(
    TaskServiceError::AlreadyAssigned { task_id: task(1), user_id: UserId::new(1).expect("valid id") },
    StatusCode::BAD_REQUEST
)]
#[case(
    TaskServiceError::ProjectNotFound(ProjectId::new(8).expect("valid id")),
    StatusCode::NOT_FOUND
)]
#[case(
    TaskServiceError::Repository(TaskRepositoryError::NotFound(task(3))),
    StatusCode::NOT_FOUND
)]
#[case(
    TaskServiceError::Repository(TaskRepositoryError::persistence(std::io::Error::other("down"))),
    StatusCode::INTERNAL_SERVER_ERROR
)]
fn task_errors_map_to_status(#[case] err: TaskServiceError, #[case] expected: StatusCode) {
    assert_eq!(ApiError::from(err).status(), expected);
}

#[rstest]
fn duplicate_email_is_a_bad_request() {
    let email = EmailAddress::new("dev@example.com").expect("valid email");
    let err = UserDirectoryError::Repository(UserRepositoryError::DuplicateEmail(email));
    assert_eq!(ApiError::from(err).status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn error_response_carries_message_body() {
    let err = ApiError::not_found("task not found: 9");

    let response = err.error_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let bytes = to_bytes(response.into_body()).await.expect("body bytes");
    let body: ErrorBody = serde_json::from_slice(&bytes).expect("json body");
    assert_eq!(body.message, "task not found: 9");
}
