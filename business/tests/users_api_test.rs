//! Integration tests for loading users from the remote API.
//!
//! A wiremock server stands in for the users endpoint; these tests cover the
//! async client and the background loader the UI polls.

use std::time::Duration;

use roster_business::users::api::list_users;
use roster_business::{ApiError, Column, TableAction, UsersLoader, UsersState};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn users_json() -> serde_json::Value {
    serde_json::json!([
        {
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": { "street": "Kulas Light", "city": "Gwenborough" },
            "phone": "1-770-736-8031 x56442",
            "company": { "name": "Romaguera-Crona" }
        },
        {
            "id": 2,
            "name": "Ervin Howell",
            "username": "Antonette",
            "email": "Shanna@melissa.tv",
            "address": { "street": "Victor Plains", "city": "Wisokyburgh" },
            "phone": "010-692-6593 x09125",
            "company": { "name": "Deckow-Crist" }
        },
        {
            "id": 3,
            "name": "clementine Bauch",
            "email": "Nathan@yesenia.net",
            "phone": "1-463-123-4447"
        }
    ])
}

/// Starts a mock server answering `GET /users` with `template`.
async fn setup_users_server(template: ResponseTemplate) -> MockServer {
    let _ = env_logger::builder().is_test(true).try_init();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(template)
        .mount(&mock_server)
        .await;

    mock_server
}

#[tokio::test]
async fn test_list_users_success() {
    let server = setup_users_server(ResponseTemplate::new(200).set_body_json(users_json())).await;

    let users = list_users(&format!("{}/users", server.uri()))
        .await
        .expect("users should load");

    assert_eq!(users.len(), 3);
    assert_eq!(users[0].name, "Leanne Graham");
    assert_eq!(Column::City.value(&users[1]), "Wisokyburgh");
    assert_eq!(Column::Company.value(&users[2]), "");
}

#[tokio::test]
async fn test_list_users_status_error() {
    let server = setup_users_server(ResponseTemplate::new(503)).await;

    let err = list_users(&format!("{}/users", server.uri()))
        .await
        .expect_err("503 should fail");

    assert!(matches!(err, ApiError::Status { status: 503 }));
    assert_eq!(err.to_string(), "API returned status: 503");
}

#[tokio::test]
async fn test_list_users_malformed_body() {
    let server =
        setup_users_server(ResponseTemplate::new(200).set_body_string("<html>oops</html>")).await;

    let err = list_users(&format!("{}/users", server.uri()))
        .await
        .expect_err("html body should fail to decode");

    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_list_users_unreachable_host() {
    // Nothing listens on port 9 (discard) locally.
    let err = list_users("http://127.0.0.1:9/users")
        .await
        .expect_err("connection should fail");

    assert!(matches!(err, ApiError::Http(_)));
}

#[tokio::test]
async fn test_list_users_requests_json() {
    let _ = env_logger::builder().is_test(true).try_init();
    let server = MockServer::start().await;

    // Only a request asking for JSON gets the users
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_json()))
        .expect(1)
        .mount(&server)
        .await;

    let users = list_users(&format!("{}/users", server.uri()))
        .await
        .expect("users should load");
    assert_eq!(users.len(), 3);
}

/// Polls the loader until it yields a result or the deadline passes.
async fn wait_for_load(loader: &mut UsersLoader) -> roster_business::LoadResult {
    for _ in 0..100 {
        if let Some(result) = loader.poll() {
            return result;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("users loader did not finish in time");
}

#[tokio::test]
async fn test_loader_feeds_state() {
    let server = setup_users_server(ResponseTemplate::new(200).set_body_json(users_json())).await;

    let mut loader = UsersLoader::new();
    let mut state = UsersState::new();

    state.set_fetching();
    assert!(loader.start(&format!("{}/users", server.uri()), || {}));
    // A second start while in flight is ignored.
    assert!(!loader.start(&format!("{}/users", server.uri()), || {}));

    let result = wait_for_load(&mut loader).await;
    state.apply_load_result(result, chrono::Utc::now());

    assert!(!state.is_fetching());
    assert!(!loader.is_in_flight());
    assert_eq!(state.users().len(), 3);

    // Sorted case-insensitively by name: "clementine" sorts before "Ervin".
    let names: Vec<String> = state.visible_users().into_iter().map(|u| u.name).collect();
    assert_eq!(names, vec!["clementine Bauch", "Ervin Howell", "Leanne Graham"]);

    state.dispatch(TableAction::SetSort(Column::Company));
    let first = state.visible_users().into_iter().next().expect("rows");
    assert_eq!(first.id, 3);
}

#[tokio::test]
async fn test_loader_failure_surfaces_error() {
    let server = setup_users_server(ResponseTemplate::new(500)).await;

    let mut loader = UsersLoader::new();
    let mut state = UsersState::new();
    state.set_fetching();
    loader.start(&format!("{}/users", server.uri()), || {});

    let result = wait_for_load(&mut loader).await;
    state.apply_load_result(result, chrono::Utc::now());

    assert!(state.users().is_empty());
    assert_eq!(state.error.as_deref(), Some("API returned status: 500"));
}
