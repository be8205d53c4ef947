use serde_json::json;

use crate::common::routes::*;
use crate::common::*;

#[tokio::test]
async fn register_grants_initial_credits() {
    let app = TestApp::spawn().await;

    let res = app
        .post_without_token(
            REGISTER,
            &json!({ "username": "newcomer", "password": PASSWORD }),
        )
        .await;

    assert_eq!(res.status, 201, "Registration failed: {}", res.text);
    assert_eq!(res.body["username"], "newcomer");
    assert_eq!(res.body["credits"], 3);
    assert_eq!(app.credits_of("newcomer").await, 3);
}

#[tokio::test]
async fn register_rejects_duplicate_username() {
    let app = TestApp::spawn().await;
    app.create_authenticated_user("taken").await;

    let res = app
        .post_without_token(REGISTER, &json!({ "username": "taken", "password": PASSWORD }))
        .await;

    assert_eq!(res.status, 409);
    assert_eq!(res.body["code"], "USERNAME_TAKEN");
}

#[tokio::test]
async fn register_rejects_short_password() {
    let app = TestApp::spawn().await;

    let res = app
        .post_without_token(REGISTER, &json!({ "username": "shorty", "password": "abc" }))
        .await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn login_with_wrong_password_fails() {
    let app = TestApp::spawn().await;
    app.create_authenticated_user("careful").await;

    let res = app
        .post_without_token(
            LOGIN,
            &json!({ "username": "careful", "password": "wrongpassword" }),
        )
        .await;

    assert_eq!(res.status, 401);
    assert_eq!(res.body["code"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn login_with_unknown_user_fails() {
    let app = TestApp::spawn().await;

    let res = app
        .post_without_token(LOGIN, &json!({ "username": "ghost", "password": PASSWORD }))
        .await;

    assert_eq!(res.status, 401);
    assert_eq!(res.body["code"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn me_reports_live_balance() {
    let app = TestApp::spawn().await;
    let token = app.create_user_with_credits("watcher", 7).await;

    let res = app.get_with_token(ME, &token).await;

    assert_eq!(res.status, 200, "Me failed: {}", res.text);
    assert_eq!(res.body["username"], "watcher");
    assert_eq!(res.body["credits"], 7);
}

#[tokio::test]
async fn me_requires_token() {
    let app = TestApp::spawn().await;

    let res = app.get_without_token(ME).await;

    assert_eq!(res.status, 401);
    assert_eq!(res.body["code"], "TOKEN_MISSING");
}
