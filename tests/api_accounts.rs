//! Account endpoint integration tests

use axum::http::StatusCode;
use serde_json::json;

mod common;

use common::{body_json, seed_user, send, send_json, test_app, VALID_DOCUMENT};

#[tokio::test]
async fn create_account_embeds_the_user_snapshot() {
    let app = test_app();
    let user_id = seed_user(&app, "Test", VALID_DOCUMENT, "test@test.com").await;

    let response = send_json(
        &app,
        "POST",
        "/account",
        json!({ "accountBalance": 100.0, "userId": user_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(
        body["message"],
        "operation from handler: create-account successfull"
    );
    assert!(body["data"]["id"].as_i64().unwrap() > 0);
    assert_eq!(body["data"]["balance"], 100.0);
    assert_eq!(body["data"]["user"]["id"].as_i64().unwrap(), user_id);
    assert_eq!(body["data"]["user"]["email"], "test@test.com");
    assert_eq!(body["data"]["transactions"], json!([]));
}

#[tokio::test]
async fn create_account_accepts_zero_balance() {
    let app = test_app();
    let user_id = seed_user(&app, "Test", VALID_DOCUMENT, "test@test.com").await;

    let response = send_json(
        &app,
        "POST",
        "/account",
        json!({ "accountBalance": 0.0, "userId": user_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn negative_balance_is_reported_before_user_id() {
    let app = test_app();

    // userId 5 does not exist either, but balance wins.
    let response = send_json(
        &app,
        "POST",
        "/account",
        json!({ "accountBalance": -1.0, "userId": 5 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["errorCode"], 400);
    assert_eq!(body["message"], "param: balance (type: float64) is required");
}

#[tokio::test]
async fn create_account_without_user_id_is_bad_request() {
    let app = test_app();

    let response = send_json(&app, "POST", "/account", json!({ "accountBalance": 10.0 })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["message"], "param: userId (type: uint) is required");
}

#[tokio::test]
async fn negative_balance_and_missing_user_is_empty_body() {
    let app = test_app();

    let response = send_json(&app, "POST", "/account", json!({ "accountBalance": -1.0 })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["message"], "request body is empty or malformed");
}

#[tokio::test]
async fn unknown_user_is_a_client_error() {
    let app = test_app();

    let response = send_json(
        &app,
        "POST",
        "/account",
        json!({ "accountBalance": 100.0, "userId": 999 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["errorCode"], 400);
    assert_eq!(body["message"], "user not found");
}

#[tokio::test]
async fn deleted_user_cannot_receive_an_account() {
    let app = test_app();
    let user_id = seed_user(&app, "Test", VALID_DOCUMENT, "test@test.com").await;

    let response = send(&app, "DELETE", &format!("/user?id={}", user_id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send_json(
        &app,
        "POST",
        "/account",
        json!({ "accountBalance": 100.0, "userId": user_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["message"], "user not found");
}
