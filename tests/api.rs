use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use recipe_api::{app, AppState, LoadState, RecipeStore};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::util::ServiceExt;

const LIMIT: usize = 64 * 1024;

async fn fresh_app(dir: &TempDir) -> Router {
    let store = RecipeStore::open(dir.path().join("recipes.json"), true).await;
    app(AppState::new(store), LIMIT)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create_pizza(app: &Router) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/recipes",
        Some(json!({
            "Name": "Pizza",
            "Styles": ["Neapolitan"],
            "ingredients": ["Tomato Sauce", "Basil"],
            "wholesaleCost": "2.75",
            "suggestedPrice": "n/a"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

#[tokio::test]
async fn root_lists_routes() {
    let dir = TempDir::new().unwrap();
    let app = fresh_app(&dir).await;
    let (status, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["endpoints"]["GET /recipes/ingredients/:Term"].is_string());
}

#[tokio::test]
async fn create_and_read_back() {
    let dir = TempDir::new().unwrap();
    let app = fresh_app(&dir).await;
    let created = create_pizza(&app).await;
    assert_eq!(created["Id"], 1);
    assert_eq!(created["wholesaleCost"], 2.75);
    assert_eq!(created["suggestedPrice"], Value::Null);

    let (status, body) = send(&app, Method::GET, "/recipes/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);

    let (status, body) = send(&app, Method::GET, "/recipes", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([created]));

    let raw = std::fs::read_to_string(dir.path().join("recipes.json")).unwrap();
    let on_disk: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(on_disk, json!([created]));
}

#[tokio::test]
async fn create_validation_errors() {
    let dir = TempDir::new().unwrap();
    let app = fresh_app(&dir).await;

    let (status, body) = send(&app, Method::POST, "/recipes", Some(json!({ "Name": "Air" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "validation_error");

    let not_object = json!(["not", "an", "object"]);
    let (status, body) = send(&app, Method::POST, "/recipes", Some(not_object)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "bad_request");

    let (status, _) = send(
        &app,
        Method::POST,
        "/recipes",
        Some(json!({ "Name": "Pizza", "ingredients": "cheese" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn lookups_by_name_and_ingredient() {
    let dir = TempDir::new().unwrap();
    let app = fresh_app(&dir).await;
    let created = create_pizza(&app).await;

    let (status, body) = send(&app, Method::GET, "/recipes/name/Pizza", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);

    let (status, body) = send(&app, Method::GET, "/recipes/ingredients/tomato", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([created]));

    let (status, body) = send(&app, Method::GET, "/recipes/ingredients/pineapple", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn name_segments_are_percent_decoded() {
    let dir = TempDir::new().unwrap();
    let app = fresh_app(&dir).await;
    send(
        &app,
        Method::POST,
        "/recipes",
        Some(json!({ "Name": "Pepperoni Pizza", "ingredients": ["Pepperoni"] })),
    )
    .await;

    let (status, body) = send(&app, Method::GET, "/recipes/name/Pepperoni%20Pizza", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Name"], "Pepperoni Pizza");

    let (status, _) = send(&app, Method::DELETE, "/recipes/name/pepperoni%20pizza", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn updates_by_id_and_name() {
    let dir = TempDir::new().unwrap();
    let app = fresh_app(&dir).await;
    create_pizza(&app).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/recipes/name/pizza",
        Some(json!({ "Name": "Calzone", "WholesaleCost": "3.50" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Name"], "Pizza");
    assert_eq!(body["Id"], 1);
    assert_eq!(body["wholesaleCost"], 3.5);

    let (status, body) = send(
        &app,
        Method::PUT,
        "/recipes/1",
        Some(json!({ "Id": 7, "Name": "Calzone" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Name"], "Calzone");
    assert_eq!(body["Id"], 1);
    assert_eq!(body["Styles"], json!(["Neapolitan"]));

    let (status, _) = send(&app, Method::PUT, "/recipes/9", Some(json!({ "Name": "X" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, Method::PUT, "/recipes/name/ghost", Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deletes() {
    let dir = TempDir::new().unwrap();
    let app = fresh_app(&dir).await;
    create_pizza(&app).await;

    let (status, body) = send(&app, Method::DELETE, "/recipes/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, Method::DELETE, "/recipes/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, "/recipes/name/pizza", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_numeric_id_is_not_found() {
    let dir = TempDir::new().unwrap();
    let app = fresh_app(&dir).await;
    let (status, body) = send(&app, Method::GET, "/recipes/abc", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn unmatched_route_is_404() {
    let dir = TempDir::new().unwrap();
    let app = fresh_app(&dir).await;
    let (status, body) = send(&app, Method::GET, "/recipies", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "404 Not Found");
}

#[tokio::test]
async fn options_answers_no_content_with_cors() {
    let dir = TempDir::new().unwrap();
    let app = fresh_app(&dir).await;
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/recipes")
        .header(header::ORIGIN, "http://example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test]
async fn load_failure_reports_errors() {
    let dir = TempDir::new().unwrap();
    let store = RecipeStore::with_state(
        dir.path().join("recipes.json"),
        LoadState::LoadFailed("expected value at line 1 column 1".into()),
    );
    let app = app(AppState::new(store), LIMIT);

    let (status, body) = send(&app, Method::GET, "/recipes", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"]["code"], "load_error");

    let (status, _) = send(
        &app,
        Method::POST,
        "/recipes",
        Some(json!({ "Name": "Pizza", "ingredients": ["Dough"] })),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let (status, body) = send(&app, Method::POST, "/recipes", Some(json!({ "Name": "Air" }))).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"]["code"], "load_error");

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
}

#[tokio::test]
async fn persistence_failure_is_500() {
    let dir = TempDir::new().unwrap();
    let store = RecipeStore::with_state(
        dir.path().join("missing-dir").join("recipes.json"),
        LoadState::Loaded(Vec::new()),
    );
    let app = app(AppState::new(store), LIMIT);

    let (status, body) = send(
        &app,
        Method::POST,
        "/recipes",
        Some(json!({ "Name": "Pizza", "ingredients": ["Dough"] })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "persistence_error");
    assert!(body["error"]["message"].as_str().unwrap().starts_with("failed to save data"));
}

#[tokio::test]
async fn health_and_version() {
    let dir = TempDir::new().unwrap();
    let app = fresh_app(&dir).await;
    create_pizza(&app).await;

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok", "recipes": 1 }));

    let (status, body) = send(&app, Method::GET, "/version", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "recipe-api");
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let dir = TempDir::new().unwrap();
    let store = RecipeStore::open(dir.path().join("recipes.json"), true).await;
    let app = app(AppState::new(store), 32);
    let payload =
        json!({ "Name": "A very long recipe name indeed", "ingredients": ["x"] }).to_string();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/recipes")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CONTENT_LENGTH, payload.len())
        .body(Body::from(payload))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"]["code"], "payload_too_large");
}

#[tokio::test]
async fn body_limit_above_default_is_honoured() {
    let dir = TempDir::new().unwrap();
    let store = RecipeStore::open(dir.path().join("recipes.json"), true).await;
    let app = app(AppState::new(store), 4 * 1024 * 1024);
    let ingredients: Vec<String> = (0..100_000)
        .map(|i| format!("ingredient number {:06}", i))
        .collect();
    let payload = json!({ "Name": "Banquet", "ingredients": ingredients });
    assert!(payload.to_string().len() > 2 * 1024 * 1024);

    let (status, body) = send(&app, Method::POST, "/recipes", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["ingredients"].as_array().unwrap().len(), 100_000);
}
