//! End-to-end tests for the HTTP surface over in-memory repositories.

use std::sync::Arc;

use actix_web::{
    App,
    body::MessageBody,
    dev::{Service, ServiceResponse},
    http::StatusCode,
    test, web,
};
use rstest::rstest;
use serde_json::{Value, json};
use sprinthub::api::{
    AppState, ErrorBody, GenerateTestCaseResponse, ProjectResponse, Repositories, TaskResponse,
    TestCaseResponse, UserResponse, configure,
};
use sprinthub::test_case::{
    adapters::memory::StaticGherkinGenerator, domain::GherkinScenario, ports::GeneratorError,
};

const LOGIN_GHERKIN: &str = "Feature: Login\n  Scenario: valid credentials\n    Given a registered user\n    When they sign in\n    Then the dashboard is shown";

fn replying_generator() -> StaticGherkinGenerator {
    let scenario = GherkinScenario::new(LOGIN_GHERKIN).expect("valid scenario");
    StaticGherkinGenerator::replying(scenario)
}

async fn app(
    generator: StaticGherkinGenerator,
) -> impl Service<
    actix_http::Request,
    Response = ServiceResponse<impl MessageBody>,
    Error = actix_web::Error,
> {
    let state = AppState::new(Repositories::in_memory(), Arc::new(generator));
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure),
    )
    .await
}

async fn create_project<S, B>(app: &S) -> ProjectResponse
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let request = test::TestRequest::post()
        .uri("/api/projects")
        .set_json(json!({
            "name": "Checkout revamp",
            "description": "Rebuild the checkout flow",
            "startDate": "2025-03-01T00:00:00Z"
        }))
        .to_request();
    let response = test::call_service(app, request).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    test::read_body_json(response).await
}

async fn create_task<S, B>(app: &S, project_id: i64, description: &str) -> TaskResponse
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let request = test::TestRequest::post()
        .uri("/api/tasks")
        .set_json(json!({
            "projectId": project_id,
            "title": "Login form",
            "description": description,
        }))
        .to_request();
    let response = test::call_service(app, request).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    test::read_body_json(response).await
}

async fn generate<S, B>(app: &S, body: Value) -> ServiceResponse<B>
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let request = test::TestRequest::post()
        .uri("/testcase/generate")
        .set_json(body)
        .to_request();
    test::call_service(app, request).await
}

#[actix_web::test]
async fn health_reports_ok() {
    let service = app(replying_generator()).await;
    let response = test::call_service(
        &service,
        test::TestRequest::get().uri("/health").to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body, json!({ "status": "ok" }));
}

#[actix_web::test]
async fn generate_relays_description_and_stores_result() {
    let generator = replying_generator();
    let service = app(generator.clone()).await;
    let project = create_project(&service).await;
    let task = create_task(&service, project.id, "As a user I want to log in").await;

    let response = generate(&service, json!({ "projectTaskId": task.id })).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: GenerateTestCaseResponse = test::read_body_json(response).await;
    assert!(body.test_case_id > 0);
    assert_eq!(body.gherkin, LOGIN_GHERKIN);
    assert_eq!(generator.received(), vec!["As a user I want to log in"]);

    let stored = test::call_service(
        &service,
        test::TestRequest::get()
            .uri(&format!("/testcase/{}", body.test_case_id))
            .to_request(),
    )
    .await;
    assert_eq!(stored.status(), StatusCode::OK);
    let test_case: TestCaseResponse = test::read_body_json(stored).await;
    assert_eq!(test_case.task_id, task.id);
    assert_eq!(test_case.gherkin, LOGIN_GHERKIN);
}

#[actix_web::test]
async fn repeated_generation_stores_a_new_test_case_each_time() {
    let service = app(replying_generator()).await;
    let project = create_project(&service).await;
    let task = create_task(&service, project.id, "As a user I want to log in").await;

    let first: GenerateTestCaseResponse =
        test::read_body_json(generate(&service, json!({ "projectTaskId": task.id })).await).await;
    let second: GenerateTestCaseResponse =
        test::read_body_json(generate(&service, json!({ "projectTaskId": task.id })).await).await;
    assert_ne!(first.test_case_id, second.test_case_id);

    let listed = test::call_service(
        &service,
        test::TestRequest::get()
            .uri(&format!("/testcase/task/{}", task.id))
            .to_request(),
    )
    .await;
    assert_eq!(listed.status(), StatusCode::OK);
    let test_cases: Vec<TestCaseResponse> = test::read_body_json(listed).await;
    let ids: Vec<i64> = test_cases.iter().map(|test_case| test_case.id).collect();
    assert_eq!(ids, vec![first.test_case_id, second.test_case_id]);
}

#[rstest]
#[case::zero(json!({ "projectTaskId": 0 }))]
#[case::negative(json!({ "projectTaskId": -7 }))]
#[case::missing_field(json!({}))]
#[case::wrong_type(json!({ "projectTaskId": "forty-two" }))]
#[actix_web::test]
async fn generate_rejects_malformed_requests(#[case] body: Value) {
    let generator = replying_generator();
    let service = app(generator.clone()).await;

    let response = generate(&service, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorBody = test::read_body_json(response).await;
    assert!(!error.message.is_empty());
    assert!(generator.received().is_empty());
}

#[actix_web::test]
async fn generate_reports_unknown_task_as_not_found() {
    let generator = replying_generator();
    let service = app(generator.clone()).await;

    let response = generate(&service, json!({ "projectTaskId": 999 })).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(generator.received().is_empty());
}

#[rstest]
#[case::unavailable(GeneratorError::Unavailable("connection refused".to_owned()))]
#[case::invalid_response(GeneratorError::InvalidResponse("missing gherkin".to_owned()))]
#[actix_web::test]
async fn generator_failures_are_server_errors_and_store_nothing(#[case] failure: GeneratorError) {
    let service = app(StaticGherkinGenerator::failing(failure)).await;
    let project = create_project(&service).await;
    let task = create_task(&service, project.id, "As a user I want to log in").await;

    let response = generate(&service, json!({ "projectTaskId": task.id })).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let error: ErrorBody = test::read_body_json(response).await;
    assert!(!error.message.is_empty());

    let listed = test::call_service(
        &service,
        test::TestRequest::get()
            .uri(&format!("/testcase/task/{}", task.id))
            .to_request(),
    )
    .await;
    let test_cases: Vec<TestCaseResponse> = test::read_body_json(listed).await;
    assert!(test_cases.is_empty());
}

#[actix_web::test]
async fn task_lifecycle_over_http() {
    let service = app(replying_generator()).await;
    let project = create_project(&service).await;
    let task = create_task(&service, project.id, "Wire up the login form").await;
    assert_eq!(task.project_id, project.id);

    let moved = test::call_service(
        &service,
        test::TestRequest::put()
            .uri(&format!("/api/tasks/{}/status", task.id))
            .set_json(json!({ "status": "In Progress" }))
            .to_request(),
    )
    .await;
    assert_eq!(moved.status(), StatusCode::OK);
    let moved_body: Value = test::read_body_json(moved).await;
    assert_eq!(moved_body["status"], "in-progress");

    let rejected = test::call_service(
        &service,
        test::TestRequest::put()
            .uri(&format!("/api/tasks/{}/status", task.id))
            .set_json(json!({ "status": "archived" }))
            .to_request(),
    )
    .await;
    assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);

    let by_project = test::call_service(
        &service,
        test::TestRequest::get()
            .uri(&format!("/api/tasks/byProject/{}", project.id))
            .to_request(),
    )
    .await;
    let listed: Vec<TaskResponse> = test::read_body_json(by_project).await;
    assert_eq!(listed.len(), 1);

    let deleted = test::call_service(
        &service,
        test::TestRequest::delete()
            .uri(&format!("/api/tasks/{}", task.id))
            .to_request(),
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let missing = test::call_service(
        &service,
        test::TestRequest::get()
            .uri(&format!("/api/tasks/{}", task.id))
            .to_request(),
    )
    .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn deleting_a_task_removes_its_test_cases() {
    let service = app(replying_generator()).await;
    let project = create_project(&service).await;
    let task = create_task(&service, project.id, "As a user I want to log in").await;
    let generated = generate(&service, json!({ "projectTaskId": task.id })).await;
    let body: GenerateTestCaseResponse = test::read_body_json(generated).await;

    let deleted = test::call_service(
        &service,
        test::TestRequest::delete()
            .uri(&format!("/api/tasks/{}", task.id))
            .to_request(),
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let stored = test::call_service(
        &service,
        test::TestRequest::get()
            .uri(&format!("/testcase/{}", body.test_case_id))
            .to_request(),
    )
    .await;
    assert_eq!(stored.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn deleting_a_project_removes_its_tasks_and_blocks_generation() {
    let generator = replying_generator();
    let service = app(generator.clone()).await;
    let project = create_project(&service).await;
    let task = create_task(&service, project.id, "As a user I want to log in").await;
    let generated = generate(&service, json!({ "projectTaskId": task.id })).await;
    let body: GenerateTestCaseResponse = test::read_body_json(generated).await;

    let deleted = test::call_service(
        &service,
        test::TestRequest::delete()
            .uri(&format!("/api/projects/{}", project.id))
            .to_request(),
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let missing_task = test::call_service(
        &service,
        test::TestRequest::get()
            .uri(&format!("/api/tasks/{}", task.id))
            .to_request(),
    )
    .await;
    assert_eq!(missing_task.status(), StatusCode::NOT_FOUND);

    let missing_test_case = test::call_service(
        &service,
        test::TestRequest::get()
            .uri(&format!("/testcase/{}", body.test_case_id))
            .to_request(),
    )
    .await;
    assert_eq!(missing_test_case.status(), StatusCode::NOT_FOUND);

    let regenerated = generate(&service, json!({ "projectTaskId": task.id })).await;
    assert_eq!(regenerated.status(), StatusCode::NOT_FOUND);
    assert_eq!(generator.received().len(), 1);
}

#[actix_web::test]
async fn creating_a_task_for_an_unknown_project_is_not_found() {
    let service = app(replying_generator()).await;

    let response = test::call_service(
        &service,
        test::TestRequest::post()
            .uri("/api/tasks")
            .set_json(json!({
                "projectId": 404,
                "title": "Orphan",
                "description": "No project owns this",
            }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn users_join_projects_and_tasks() {
    let service = app(replying_generator()).await;
    let project = create_project(&service).await;
    let task = create_task(&service, project.id, "Review the login copy").await;

    let registered = test::call_service(
        &service,
        test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({ "name": "Ada", "email": "Ada@Example.com" }))
            .to_request(),
    )
    .await;
    assert_eq!(registered.status(), StatusCode::CREATED);
    let user: UserResponse = test::read_body_json(registered).await;
    assert_eq!(user.email, "ada@example.com");

    let duplicate = test::call_service(
        &service,
        test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({ "name": "Ada again", "email": "ada@example.com" }))
            .to_request(),
    )
    .await;
    assert_eq!(duplicate.status(), StatusCode::BAD_REQUEST);

    let added = test::call_service(
        &service,
        test::TestRequest::post()
            .uri(&format!("/api/projects/{}/add-member/{}", project.id, user.id))
            .to_request(),
    )
    .await;
    assert_eq!(added.status(), StatusCode::OK);

    let assigned = test::call_service(
        &service,
        test::TestRequest::post()
            .uri(&format!("/api/tasks/{}/assignees/{}", task.id, user.id))
            .to_request(),
    )
    .await;
    assert_eq!(assigned.status(), StatusCode::NO_CONTENT);

    let projects = test::call_service(
        &service,
        test::TestRequest::get()
            .uri(&format!("/api/users/{}/projects", user.id))
            .to_request(),
    )
    .await;
    let user_projects: Vec<ProjectResponse> = test::read_body_json(projects).await;
    assert_eq!(
        user_projects.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![project.id]
    );

    let tasks = test::call_service(
        &service,
        test::TestRequest::get()
            .uri(&format!("/api/users/{}/tasks", user.id))
            .to_request(),
    )
    .await;
    let user_tasks: Vec<TaskResponse> = test::read_body_json(tasks).await;
    assert_eq!(
        user_tasks.iter().map(|t| t.id).collect::<Vec<_>>(),
        vec![task.id]
    );

    let assignees = test::call_service(
        &service,
        test::TestRequest::get()
            .uri(&format!("/api/tasks/{}/assignees", task.id))
            .to_request(),
    )
    .await;
    let task_assignees: Vec<UserResponse> = test::read_body_json(assignees).await;
    assert_eq!(task_assignees, vec![user]);
}

#[actix_web::test]
async fn non_numeric_path_ids_are_bad_requests() {
    let service = app(replying_generator()).await;

    let response = test::call_service(
        &service,
        test::TestRequest::get().uri("/api/tasks/abc").to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorBody = test::read_body_json(response).await;
    assert!(!error.message.is_empty());
}
