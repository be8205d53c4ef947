use serde_json::json;

use crate::common::routes::*;
use crate::common::*;

#[tokio::test]
async fn list_icons_returns_callers_icons_newest_first() {
    let app = TestApp::spawn().await;
    let token = app.create_user_with_credits("collector", 3).await;
    let other = app.create_user_with_credits("bystander", 3).await;

    for prompt in ["first", "second"] {
        let res = app
            .post_with_token(GENERATE_ICON, &json!({ "prompt": prompt }), &token)
            .await;
        assert_eq!(res.status, 200, "Generate failed: {}", res.text);
    }
    let res = app
        .post_with_token(GENERATE_ICON, &json!({ "prompt": "not yours" }), &other)
        .await;
    assert_eq!(res.status, 200);

    let res = app.get_with_token(ICONS, &token).await;
    assert_eq!(res.status, 200, "List failed: {}", res.text);

    let data = res.body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["prompt"], "second");
    assert_eq!(data[1]["prompt"], "first");

    for item in data {
        let id = item["id"].as_str().unwrap();
        assert_eq!(item["imageUrl"], format!("{}{}", url_prefix(), id));
        assert!(item["createdAt"].is_string());
    }
}

#[tokio::test]
async fn list_icons_is_empty_for_new_user() {
    let app = TestApp::spawn().await;
    let token = app.create_authenticated_user("fresh").await;

    let res = app.get_with_token(ICONS, &token).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body["data"].as_array().unwrap().len(), 0);
    assert_eq!(res.body["pagination"]["total"], 0);
    assert_eq!(res.body["pagination"]["total_pages"], 0);
}

#[tokio::test]
async fn list_icons_paginates() {
    let app = TestApp::spawn().await;
    let token = app.create_user_with_credits("prolific", 3).await;

    for prompt in ["one", "two", "three"] {
        let res = app
            .post_with_token(GENERATE_ICON, &json!({ "prompt": prompt }), &token)
            .await;
        assert_eq!(res.status, 200, "Generate failed: {}", res.text);
    }

    let res = app
        .get_with_token(&format!("{ICONS}?page=1&per_page=2"), &token)
        .await;
    assert_eq!(res.status, 200, "List failed: {}", res.text);
    let first: Vec<_> = res.body["data"].as_array().unwrap().clone();
    assert_eq!(first.len(), 2);
    assert_eq!(first[0]["prompt"], "three");
    assert_eq!(first[1]["prompt"], "two");
    assert_eq!(res.body["pagination"]["page"], 1);
    assert_eq!(res.body["pagination"]["per_page"], 2);
    assert_eq!(res.body["pagination"]["total"], 3);
    assert_eq!(res.body["pagination"]["total_pages"], 2);

    let res = app
        .get_with_token(&format!("{ICONS}?page=2&per_page=2"), &token)
        .await;
    let second = res.body["data"].as_array().unwrap();
    assert_eq!(second.len(), 1);
    assert_eq!(second[0]["prompt"], "one");
    assert_eq!(res.body["pagination"]["page"], 2);

    let res = app
        .get_with_token(&format!("{ICONS}?page=3&per_page=2"), &token)
        .await;
    assert_eq!(res.body["data"].as_array().unwrap().len(), 0);
    assert_eq!(res.body["pagination"]["total"], 3);
}

#[tokio::test]
async fn list_icons_clamps_out_of_range_params() {
    let app = TestApp::spawn().await;
    let token = app.create_authenticated_user("clamped").await;

    let res = app
        .get_with_token(&format!("{ICONS}?page=0&per_page=1000"), &token)
        .await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body["pagination"]["page"], 1);
    assert_eq!(res.body["pagination"]["per_page"], 100);
}

#[tokio::test]
async fn credits_endpoint_tracks_spending() {
    let app = TestApp::spawn().await;
    let token = app.create_user_with_credits("spender", 2).await;

    let res = app.get_with_token(CREDITS, &token).await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["credits"], 2);

    app.post_with_token(GENERATE_ICON, &json!({ "prompt": "coin" }), &token)
        .await;

    let res = app.get_with_token(CREDITS, &token).await;
    assert_eq!(res.body["credits"], 1);
}

#[tokio::test]
async fn icons_and_credits_require_token() {
    let app = TestApp::spawn().await;

    assert_eq!(app.get_without_token(ICONS).await.status, 401);
    assert_eq!(app.get_without_token(CREDITS).await.status, 401);
}
