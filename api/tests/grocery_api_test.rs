use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
};
use axum_test::TestServer;
use clap::Parser;
use serde_json::{Value, json};
use smart_grocery_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};

#[derive(Clone, Default)]
struct Recorded {
    requests: Arc<Mutex<Vec<(Option<String>, Value)>>>,
}

async fn spawn_upstream(status: StatusCode, reply: Value) -> (String, Recorded) {
    spawn_delayed_upstream(status, reply, Duration::ZERO).await
}

/// Serves a canned Gemini `generateContent` reply on a random local port,
/// waiting `delay` before answering.
async fn spawn_delayed_upstream(
    status: StatusCode,
    reply: Value,
    delay: Duration,
) -> (String, Recorded) {
    let recorded = Recorded::default();

    let app = Router::new()
        .route(
            "/v1beta/models/{call}",
            post(
                move |State(recorded): State<Recorded>, headers: HeaderMap, Json(body): Json<Value>| {
                    let reply = reply.clone();
                    async move {
                        let api_key = headers
                            .get("x-goog-api-key")
                            .and_then(|value| value.to_str().ok())
                            .map(str::to_string);
                        recorded.requests.lock().unwrap().push((api_key, body));
                        tokio::time::sleep(delay).await;
                        (status, Json(reply))
                    }
                },
            ),
        )
        .with_state(recorded.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), recorded)
}

fn gemini_text_reply(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
}

fn test_server(base_url: &str, extra: &[&str]) -> TestServer {
    let mut argv = vec!["--disable-metrics"];
    argv.extend_from_slice(extra);
    server_with_args(base_url, &argv)
}

fn server_with_args(base_url: &str, extra: &[&str]) -> TestServer {
    let mut argv = vec![
        "smart-grocery",
        "--gemini-api-key",
        "test-key",
        "--gemini-base-url",
        base_url,
    ];
    argv.extend_from_slice(extra);

    let args = Arc::new(Args::try_parse_from(argv).unwrap());
    let app = router(state(args).unwrap()).unwrap();
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_generate_grocery_list_returns_list_and_swaps() {
    let (base_url, recorded) = spawn_upstream(
        StatusCode::OK,
        gemini_text_reply(r#"{"Pantry":["Pasta","Olive Oil"]}"#),
    )
    .await;
    let server = test_server(&base_url, &[]);

    let response = server
        .post("/grocery-list")
        .json(&json!({"meals": ["pasta"]}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({
            "grocery_list": {"Pantry": ["Pasta", "Olive Oil"]},
            "healthier_swaps": {
                "Pasta": "whole grain pasta or zucchini noodles",
                "Olive Oil": "avocado oil"
            }
        })
    );

    let requests = recorded.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let (api_key, body) = &requests[0];
    assert_eq!(api_key.as_deref(), Some("test-key"));
    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("Given the following meals: pasta"));
}

#[tokio::test]
async fn test_prose_around_json_is_stripped() {
    let (base_url, _) = spawn_upstream(
        StatusCode::OK,
        gemini_text_reply("Here is your list:\n{\"Dairy\":[\"Milk\"]}\nEnjoy!"),
    )
    .await;
    let server = test_server(&base_url, &[]);

    let response = server
        .post("/grocery-list")
        .json(&json!({"meals": ["cereal"]}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["grocery_list"], json!({"Dairy": ["Milk"]}));
    assert_eq!(body["healthier_swaps"], json!({"Milk": "oat milk or almond milk"}));
}

#[tokio::test]
async fn test_empty_meals_is_bad_request_without_upstream_call() {
    let (base_url, recorded) = spawn_upstream(StatusCode::OK, gemini_text_reply("{}")).await;
    let server = test_server(&base_url, &[]);

    let response = server
        .post("/grocery-list")
        .json(&json!({"meals": []}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>(), json!({"error": "no meals provided"}));
    assert!(recorded.requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let (base_url, _) = spawn_upstream(StatusCode::OK, gemini_text_reply("{}")).await;
    let server = test_server(&base_url, &[]);

    let wrong_type = server
        .post("/grocery-list")
        .json(&json!({"meals": "pasta"}))
        .await;
    assert_eq!(wrong_type.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        wrong_type.json::<Value>(),
        json!({"error": "Invalid request body"})
    );

    let not_json = server.post("/grocery-list").text("{not json").await;
    assert_eq!(not_json.status_code(), StatusCode::BAD_REQUEST);

    let missing_field = server.post("/grocery-list").json(&json!({})).await;
    assert_eq!(missing_field.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_too_many_meals_is_bad_request() {
    let (base_url, _) = spawn_upstream(StatusCode::OK, gemini_text_reply("{}")).await;
    let server = test_server(&base_url, &[]);
    let meals: Vec<String> = (0..51).map(|i| format!("meal {i}")).collect();

    let response = server
        .post("/grocery-list")
        .json(&json!({"meals": meals}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let error = response.json::<Value>()["error"].as_str().unwrap().to_string();
    assert!(error.contains("at most 50 meals per request"));
}

#[tokio::test]
async fn test_upstream_failure_is_internal_error() {
    let (base_url, _) = spawn_upstream(
        StatusCode::UNAUTHORIZED,
        json!({"error": {"code": 401, "message": "API key not valid"}}),
    )
    .await;
    let server = test_server(&base_url, &[]);

    let response = server
        .post("/grocery-list")
        .json(&json!({"meals": ["pasta"]}))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let error = response.json::<Value>()["error"].as_str().unwrap().to_string();
    assert!(error.starts_with("Gemini content generation failed"));
    assert!(error.contains("401"));
}

#[tokio::test]
async fn test_slow_upstream_times_out() {
    let (base_url, recorded) = spawn_delayed_upstream(
        StatusCode::OK,
        gemini_text_reply(r#"{"Pantry":["Rice"]}"#),
        Duration::from_secs(5),
    )
    .await;
    let server = test_server(&base_url, &["--gemini-timeout-secs", "1"]);

    let response = server
        .post("/grocery-list")
        .json(&json!({"meals": ["rice bowl"]}))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let error = response.json::<Value>()["error"].as_str().unwrap().to_string();
    assert!(error.starts_with("Gemini content generation failed"));
    assert_eq!(recorded.requests.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_unparseable_model_output_is_internal_error() {
    let (base_url, _) = spawn_upstream(
        StatusCode::OK,
        gemini_text_reply("I could not come up with a list."),
    )
    .await;
    let server = test_server(&base_url, &[]);

    let response = server
        .post("/grocery-list")
        .json(&json!({"meals": ["pasta"]}))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let error = response.json::<Value>()["error"].as_str().unwrap().to_string();
    assert!(error.starts_with("failed to parse JSON response"));
    assert!(error.contains("I could not come up with a list."));
}

#[tokio::test]
async fn test_no_candidates_is_internal_error() {
    let (base_url, _) = spawn_upstream(StatusCode::OK, json!({"candidates": []})).await;
    let server = test_server(&base_url, &[]);

    let response = server
        .post("/grocery-list")
        .json(&json!({"meals": ["pasta"]}))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({"error": "no response generated from Gemini"})
    );
}

#[tokio::test]
async fn test_healthier_swaps_endpoint() {
    let (base_url, recorded) = spawn_upstream(StatusCode::OK, gemini_text_reply("{}")).await;
    let server = test_server(&base_url, &[]);

    let response = server
        .post("/healthier-swaps")
        .json(&json!({"ingredients": ["White Rice", " butter ", "Asparagus"]}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({
            "healthier_swaps": {
                "White Rice": "brown rice or quinoa",
                " butter ": "ghee or coconut oil"
            }
        })
    );
    assert!(recorded.requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_routes_honor_root_path() {
    let (base_url, _) = spawn_upstream(
        StatusCode::OK,
        gemini_text_reply(r#"{"Pantry":["Rice"]}"#),
    )
    .await;
    let server = test_server(&base_url, &["--root-path", "/api"]);

    let health = server.get("/api/health").await;
    assert_eq!(health.status_code(), StatusCode::OK);
    assert_eq!(health.json::<Value>(), json!({"status": "ok"}));

    let response = server
        .post("/api/grocery-list")
        .json(&json!({"meals": ["rice bowl"]}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let unprefixed = server.get("/health").await;
    assert_eq!(unprefixed.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_openapi_document_lists_routes() {
    let (base_url, _) = spawn_upstream(StatusCode::OK, gemini_text_reply("{}")).await;
    let server = test_server(&base_url, &[]);

    let response = server.get("/api-docs/openapi.json").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let paths = response.json::<Value>()["paths"].clone();
    assert!(paths.get("/grocery-list").is_some());
    assert!(paths.get("/healthier-swaps").is_some());
    assert!(paths.get("/health").is_some());
}

// The Prometheus recorder is process-global, so only this test enables it.
#[tokio::test]
async fn test_metrics_route_when_enabled() {
    let (base_url, _) = spawn_upstream(StatusCode::OK, gemini_text_reply("{}")).await;
    let server = server_with_args(&base_url, &["--root-path", "/api"]);

    let health = server.get("/api/health").await;
    assert_eq!(health.status_code(), StatusCode::OK);

    let metrics = server.get("/api/metrics").await;
    assert_eq!(metrics.status_code(), StatusCode::OK);
}
