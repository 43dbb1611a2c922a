//! Shared fixtures and scenario bodies.
//!
//! Every scenario takes a freshly built wrapper, issues exactly one request
//! and asserts on status and body. The same bodies run against the local
//! mock server and, when enabled, the live API.

#![allow(dead_code)]

use mock_server::MockConfig;
use reqres_core::{
    timed, CreatedUser, HttpResponse, LatencyBudget, QueryValue, RequestWrapper, SingleUser,
    Transport, UpdatedUser, UserInput, UserPage, WrapperError,
};

/// Start the mock server on a random port and return its base URL.
pub fn spawn_mock_server(config: MockConfig) -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run_with_config(listener, config).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

fn sent<E>(result: Result<HttpResponse, WrapperError<E>>, what: &str) -> HttpResponse
where
    E: std::error::Error + 'static,
{
    result.unwrap_or_else(|err| panic!("{what}: request failed: {err}"))
}

pub fn list_users<T: Transport>(api: &RequestWrapper<T>) {
    let url = api.config().endpoint("/api/users");
    let (result, elapsed) = timed(|| api.get(&url, Some(&[("page", QueryValue::Int(2))])));
    let response = sent(result, "list users");

    assert_eq!(response.status(), 200, "listing users should succeed");
    let body: UserPage = response.json().expect("list body should be a page of users");
    assert_eq!(body.page, 2, "page number should echo the request");
    assert!(!body.data.is_empty(), "page 2 should contain users");
    assert!(body.total_pages > 0, "total_pages should be reported");

    LatencyBudget::default().check("list users", elapsed);
}

pub fn create_user<T: Transport>(api: &RequestWrapper<T>) {
    let new_user = UserInput::new("morpheus", "leader");
    let url = api.config().endpoint("/api/users");
    let (result, elapsed) = timed(|| api.post(&url, &new_user));
    let response = sent(result, "create user");

    assert_eq!(response.status(), 201, "user should be created");
    let body: CreatedUser = response
        .json()
        .expect("create body should carry name, job, string id and createdAt");
    assert_eq!(body.name, new_user.name, "created name should match");
    assert_eq!(body.job, new_user.job, "created job should match");
    assert!(!body.id.is_empty(), "created id should not be empty");
    assert!(!body.created_at.is_empty(), "createdAt should be set");

    LatencyBudget::default().check("create user", elapsed);
}

pub fn update_user<T: Transport>(api: &RequestWrapper<T>) {
    let updated = UserInput::new("morpheus", "zion resident");
    let url = api.config().endpoint("/api/users/2");
    let (result, elapsed) = timed(|| api.put(&url, &updated));
    let response = sent(result, "update user");

    assert_eq!(response.status(), 200, "user should be updated");
    let body: UpdatedUser = response
        .json()
        .expect("update body should carry name, job and updatedAt");
    assert_eq!(body.name, updated.name, "updated name should match");
    assert_eq!(body.job, updated.job, "updated job should match");
    assert!(!body.updated_at.is_empty(), "updatedAt should be set");

    LatencyBudget::default().check("update user", elapsed);
}

pub fn delete_user<T: Transport>(api: &RequestWrapper<T>) {
    let url = api.config().endpoint("/api/users/2");
    let (result, elapsed) = timed(|| api.delete(&url));
    let response = sent(result, "delete user");

    assert_eq!(response.status(), 204, "delete should answer 204 No Content");
    assert_eq!(response.text(), "", "delete response body should be empty");

    LatencyBudget::default().check("delete user", elapsed);
}

pub fn get_user<T: Transport>(api: &RequestWrapper<T>) {
    let url = api.config().endpoint("/api/users/2");
    let response = sent(api.get(&url, None), "get user");

    assert_eq!(response.status(), 200, "existing user should be found");
    let body: SingleUser = response.json().expect("single user body should wrap data");
    assert_eq!(body.data.id, 2, "returned user should be the one asked for");
    assert!(!body.data.email.is_empty(), "user should have an email");
}

pub fn get_missing_user<T: Transport>(api: &RequestWrapper<T>) {
    let url = api.config().endpoint("/api/users/23");
    let response = sent(api.get(&url, None), "get missing user");

    assert_eq!(response.status(), 404, "unknown user should be passed through as 404");
}
