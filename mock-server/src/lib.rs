//! Stateless stand-in for the reqres users API.
//!
//! Serves the same routes and payload shapes the harness scenarios consume,
//! so they can run without network access. Mutations are echoed back and
//! never stored: every request sees the same fixed set of twelve users.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

pub const PER_PAGE: u32 = 6;
pub const TOTAL_USERS: u32 = 12;
pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Support {
    pub url: String,
    pub text: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserPage {
    pub page: u32,
    pub per_page: u32,
    pub total: u32,
    pub total_pages: u32,
    pub data: Vec<User>,
    pub support: Support,
}

#[derive(Deserialize)]
pub struct ListParams {
    pub page: Option<u32>,
}

/// Server-side settings. With `api_key` set, every request must carry a
/// matching `x-api-key` header.
#[derive(Clone, Debug, Default)]
pub struct MockConfig {
    pub api_key: Option<String>,
}

const NAMES: [(&str, &str); TOTAL_USERS as usize] = [
    ("George", "Bluth"),
    ("Janet", "Weaver"),
    ("Emma", "Wong"),
    ("Eve", "Holt"),
    ("Charles", "Morris"),
    ("Tracey", "Ramos"),
    ("Michael", "Lawson"),
    ("Lindsay", "Ferguson"),
    ("Tobias", "Funke"),
    ("Byron", "Fields"),
    ("George", "Edwards"),
    ("Rachel", "Howell"),
];

pub fn user(id: u32) -> Option<User> {
    let (first, last) = NAMES.get(id.checked_sub(1)? as usize)?;
    Some(User {
        id,
        email: format!("{}.{}@reqres.in", first.to_lowercase(), last.to_lowercase()),
        first_name: first.to_string(),
        last_name: last.to_string(),
        avatar: format!("https://reqres.in/img/faces/{id}-image.jpg"),
    })
}

fn support() -> Support {
    Support {
        url: "https://reqres.in/#support-heading".to_string(),
        text: "To keep ReqRes free, contributions towards server costs are appreciated!"
            .to_string(),
    }
}

/// Page numbers start at 1; page 0 and pages past the end yield no users.
pub fn page(number: u32) -> UserPage {
    let start = number
        .saturating_sub(1)
        .saturating_mul(PER_PAGE)
        .saturating_add(1);
    let data = if number == 0 {
        Vec::new()
    } else {
        (start..start.saturating_add(PER_PAGE)).filter_map(user).collect()
    };
    UserPage {
        page: number,
        per_page: PER_PAGE,
        total: TOTAL_USERS,
        total_pages: TOTAL_USERS.div_ceil(PER_PAGE),
        data,
        support: support(),
    }
}

pub fn app() -> Router {
    app_with_config(MockConfig::default())
}

pub fn app_with_config(config: MockConfig) -> Router {
    let config = Arc::new(config);
    Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route(
            "/api/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .layer(middleware::from_fn_with_state(config, require_api_key))
        .layer(TraceLayer::new_for_http())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with_config(listener, MockConfig::default()).await
}

pub async fn run_with_config(
    listener: TcpListener,
    config: MockConfig,
) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_config(config)).await
}

async fn require_api_key(
    State(config): State<Arc<MockConfig>>,
    request: Request,
    next: Next,
) -> Response {
    if let Some(expected) = &config.api_key {
        let given = request
            .headers()
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok());
        if given != Some(expected.as_str()) {
            tracing::debug!(path = %request.uri().path(), "rejecting request without a valid API key");
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Missing API key" })),
            )
                .into_response();
        }
    }
    next.run(request).await
}

async fn list_users(Query(params): Query<ListParams>) -> Json<UserPage> {
    Json(page(params.page.unwrap_or(1)))
}

async fn get_user(Path(id): Path<String>) -> Response {
    match id.parse().ok().and_then(user) {
        Some(user) => Json(json!({ "data": user, "support": support() })).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({}))).into_response(),
    }
}

async fn create_user(Json(input): Json<Value>) -> (StatusCode, Json<Value>) {
    let mut body = echo(input);
    body.insert("id".to_string(), Value::String(Uuid::new_v4().simple().to_string()));
    body.insert("createdAt".to_string(), Value::String(now()));
    (StatusCode::CREATED, Json(Value::Object(body)))
}

async fn update_user(Path(_id): Path<String>, Json(input): Json<Value>) -> Json<Value> {
    let mut body = echo(input);
    body.insert("updatedAt".to_string(), Value::String(now()));
    Json(Value::Object(body))
}

async fn delete_user(Path(_id): Path<String>) -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Non-object payloads are echoed as an empty object.
fn echo(input: Value) -> Map<String, Value> {
    match input {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
