//! Tests for the HTTP generator adapter against a local stand-in service.

use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use actix_web::{App, HttpResponse, HttpServer, dev::ServerHandle, http::StatusCode, web};
use rstest::rstest;
use serde_json::{Value, json};
use sprinthub::test_case::{
    adapters::http::HttpGherkinGenerator,
    ports::{GeneratorError, GherkinGenerator},
};

const STORY: &str = "As a shopper I want to save my cart";
const SCENARIO: &str = "Feature: Saved carts\n  Scenario: save\n    Given a cart\n    When I save it\n    Then it is kept";

#[derive(Debug, Clone)]
enum Reply {
    Json(Value),
    Status(StatusCode),
    Stall(Duration),
}

struct StandIn {
    reply: Reply,
    received: Arc<Mutex<Vec<Value>>>,
}

struct RunningStandIn {
    base_url: String,
    received: Arc<Mutex<Vec<Value>>>,
    handle: ServerHandle,
}

impl RunningStandIn {
    fn received(&self) -> Vec<Value> {
        self.received.lock().expect("received lock").clone()
    }

    async fn stop(self) {
        self.handle.stop(false).await;
    }
}

async fn answer(state: web::Data<StandIn>, body: web::Json<Value>) -> HttpResponse {
    state
        .received
        .lock()
        .expect("received lock")
        .push(body.into_inner());
    match &state.reply {
        Reply::Json(value) => HttpResponse::Ok().json(value),
        Reply::Status(status) => HttpResponse::build(*status).body("generator exploded"),
        Reply::Stall(delay) => {
            actix_web::rt::time::sleep(*delay).await;
            HttpResponse::Ok().json(json!({ "gherkin": SCENARIO }))
        }
    }
}

fn start(reply: Reply) -> RunningStandIn {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stand-in listener");
    let address = listener.local_addr().expect("stand-in address");
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = web::Data::new(StandIn {
        reply,
        received: Arc::clone(&received),
    });

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/generate-gherkin/", web::post().to(answer))
    })
    .workers(1)
    .listen(listener)
    .expect("listen on stand-in socket")
    .run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    RunningStandIn {
        base_url: format!("http://{address}"),
        received,
        handle,
    }
}

fn generator_for(base_url: &str, timeout: Duration) -> HttpGherkinGenerator {
    HttpGherkinGenerator::new(base_url, timeout).expect("build http client")
}

#[actix_web::test]
async fn posts_the_user_story_and_returns_the_scenario() {
    let stand_in = start(Reply::Json(json!({ "gherkin": SCENARIO })));
    let generator = generator_for(&stand_in.base_url, Duration::from_secs(5));

    let scenario = generator.generate(STORY).await.expect("generation succeeds");

    assert_eq!(scenario.as_str(), SCENARIO);
    assert_eq!(stand_in.received(), vec![json!({ "user_story": STORY })]);
    stand_in.stop().await;
}

#[actix_web::test]
async fn ignores_extra_response_fields() {
    let stand_in = start(Reply::Json(json!({ "gherkin": SCENARIO, "model": "v2" })));
    let generator = generator_for(&stand_in.base_url, Duration::from_secs(5));

    let scenario = generator.generate(STORY).await.expect("generation succeeds");

    assert_eq!(scenario.as_str(), SCENARIO);
    stand_in.stop().await;
}

#[rstest]
#[case::missing_field(json!({}))]
#[case::empty_scenario(json!({ "gherkin": "" }))]
#[case::null_scenario(json!({ "gherkin": null }))]
#[case::not_an_object(json!(["Feature: x"]))]
#[actix_web::test]
async fn unusable_replies_are_invalid_responses(#[case] reply: Value) {
    let stand_in = start(Reply::Json(reply));
    let generator = generator_for(&stand_in.base_url, Duration::from_secs(5));

    let result = generator.generate(STORY).await;

    assert!(
        matches!(result, Err(GeneratorError::InvalidResponse(_))),
        "expected InvalidResponse, got {result:?}"
    );
    stand_in.stop().await;
}

#[rstest]
#[case::server_error(StatusCode::INTERNAL_SERVER_ERROR)]
#[case::bad_gateway(StatusCode::BAD_GATEWAY)]
#[case::unprocessable(StatusCode::UNPROCESSABLE_ENTITY)]
#[actix_web::test]
async fn failure_statuses_are_unavailable(#[case] status: StatusCode) {
    let stand_in = start(Reply::Status(status));
    let generator = generator_for(&stand_in.base_url, Duration::from_secs(5));

    let result = generator.generate(STORY).await;

    assert!(
        matches!(result, Err(GeneratorError::Unavailable(_))),
        "expected Unavailable, got {result:?}"
    );
    assert_eq!(stand_in.received().len(), 1);
    stand_in.stop().await;
}

#[actix_web::test]
async fn slow_generators_time_out_as_unavailable() {
    let stand_in = start(Reply::Stall(Duration::from_secs(3)));
    let generator = generator_for(&stand_in.base_url, Duration::from_millis(200));

    let result = generator.generate(STORY).await;

    assert!(
        matches!(result, Err(GeneratorError::Unavailable(_))),
        "expected Unavailable, got {result:?}"
    );
    stand_in.stop().await;
}

#[actix_web::test]
async fn refused_connections_are_unavailable() {
    let address = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("reserve a port");
        listener.local_addr().expect("reserved address")
    };
    let generator = generator_for(&format!("http://{address}"), Duration::from_secs(2));

    let result = generator.generate(STORY).await;

    assert!(
        matches!(result, Err(GeneratorError::Unavailable(_))),
        "expected Unavailable, got {result:?}"
    );
}
