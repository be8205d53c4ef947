use std::sync::Arc;

use common::image_gen::mock::{FIXTURE_PNG_BASE64, MockImageGenerator};
use serde_json::json;

use crate::common::routes::*;
use crate::common::*;

#[tokio::test]
async fn generate_spends_one_credit_and_records_icon() {
    let app = TestApp::spawn().await;
    let token = app.create_user_with_credits("fox_lover", 3).await;

    let res = app
        .post_with_token(GENERATE_ICON, &json!({ "prompt": "a red fox" }), &token)
        .await;

    assert_eq!(res.status, 200, "Generate failed: {}", res.text);
    assert_eq!(app.credits_of("fox_lover").await, 2);

    let icons = app.icons_of("fox_lover").await;
    assert_eq!(icons.len(), 1);
    assert_eq!(icons[0].prompt, "a red fox");

    let icon_id = icons[0].id.to_string();
    assert_eq!(res.body["iconId"], icon_id.as_str());

    let image_url = res.body["imageUrl"].as_str().unwrap();
    assert_eq!(image_url, format!("{}{}", url_prefix(), icon_id));
}

#[tokio::test]
async fn generate_uploads_decoded_png_under_icon_id() {
    let app = TestApp::spawn().await;
    let token = app.create_user_with_credits("uploader", 1).await;

    let res = app
        .post_with_token(GENERATE_ICON, &json!({ "prompt": "a tiny robot" }), &token)
        .await;
    assert_eq!(res.status, 200, "Generate failed: {}", res.text);

    let icon_id = res.body["iconId"].as_str().unwrap();
    let stored = app.objects.get(icon_id).await.expect("Object should exist");

    let expected = common::image_gen::GeneratedImage::from_base64(FIXTURE_PNG_BASE64)
        .decode()
        .unwrap();
    assert_eq!(stored.data, expected);
    assert_eq!(stored.content_type, "image/png");
}

#[tokio::test]
async fn generate_with_zero_credits_is_rejected_without_side_effects() {
    let app = TestApp::spawn().await;
    let token = app.create_user_with_credits("broke", 0).await;

    let res = app
        .post_with_token(GENERATE_ICON, &json!({ "prompt": "a red fox" }), &token)
        .await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "BAD_REQUEST");
    assert_eq!(res.body["message"], "Not enough credits to generate an icon");
    assert_eq!(app.credits_of("broke").await, 0);
    assert_eq!(app.icon_count().await, 0);
    assert!(app.objects.is_empty().await);
}

#[tokio::test]
async fn generate_requires_authentication() {
    let app = TestApp::spawn().await;
    app.create_user_with_credits("someone", 3).await;

    let res = app
        .post_without_token(GENERATE_ICON, &json!({ "prompt": "a red fox" }))
        .await;
    assert_eq!(res.status, 401);
    assert_eq!(res.body["code"], "TOKEN_MISSING");

    let res = app
        .post_with_token(GENERATE_ICON, &json!({ "prompt": "a red fox" }), "not-a-jwt")
        .await;
    assert_eq!(res.status, 401);
    assert_eq!(res.body["code"], "TOKEN_INVALID");

    assert_eq!(app.credits_of("someone").await, 3);
    assert_eq!(app.icon_count().await, 0);
}

#[tokio::test]
async fn generate_rejects_blank_and_oversized_prompts() {
    let app = TestApp::spawn().await;
    let token = app.create_user_with_credits("picky", 3).await;

    let res = app
        .post_with_token(GENERATE_ICON, &json!({ "prompt": "   " }), &token)
        .await;
    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");

    let long = "x".repeat(1001);
    let res = app
        .post_with_token(GENERATE_ICON, &json!({ "prompt": long }), &token)
        .await;
    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");

    let res = app.post_with_token(GENERATE_ICON, &json!({}), &token).await;
    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");

    assert_eq!(app.credits_of("picky").await, 3);
    assert_eq!(app.icon_count().await, 0);
}

#[tokio::test]
async fn generation_failure_keeps_credit_spent_and_records_nothing() {
    let app = TestApp::spawn_with(Arc::new(FailingImageGenerator), None).await;
    let token = app.create_user_with_credits("unlucky", 3).await;

    let res = app
        .post_with_token(GENERATE_ICON, &json!({ "prompt": "a red fox" }), &token)
        .await;

    assert_eq!(res.status, 502);
    assert_eq!(res.body["code"], "GENERATION_FAILED");
    assert_eq!(app.credits_of("unlucky").await, 2);
    assert_eq!(app.icon_count().await, 0);
}

#[tokio::test]
async fn storage_failure_keeps_credit_spent_and_icon_row() {
    let app = TestApp::spawn_with(
        Arc::new(MockImageGenerator),
        Some(Arc::new(FailingObjectStore::new())),
    )
    .await;
    let token = app.create_user_with_credits("orphaned", 3).await;

    let res = app
        .post_with_token(GENERATE_ICON, &json!({ "prompt": "a red fox" }), &token)
        .await;

    assert_eq!(res.status, 502);
    assert_eq!(res.body["code"], "STORAGE_FAILED");
    assert_eq!(app.credits_of("orphaned").await, 2);
    assert_eq!(app.icons_of("orphaned").await.len(), 1);
}

#[tokio::test]
async fn undecodable_payload_fails_after_icon_is_recorded() {
    let app = TestApp::spawn_with(Arc::new(GarbageImageGenerator), None).await;
    let token = app.create_user_with_credits("garbled", 2).await;

    let res = app
        .post_with_token(GENERATE_ICON, &json!({ "prompt": "noise" }), &token)
        .await;

    assert_eq!(res.status, 502);
    assert_eq!(res.body["code"], "GENERATION_FAILED");
    assert_eq!(app.credits_of("garbled").await, 1);
    assert_eq!(app.icons_of("garbled").await.len(), 1);
    assert!(app.objects.is_empty().await);
}

#[tokio::test]
async fn concurrent_requests_never_overspend() {
    let app = Arc::new(TestApp::spawn().await);
    let token = app.create_user_with_credits("racer", 2).await;

    let handles: Vec<_> = (0..5)
        .map(|i| {
            let app = app.clone();
            let token = token.clone();
            tokio::spawn(async move {
                app.post_with_token(
                    GENERATE_ICON,
                    &json!({ "prompt": format!("icon {i}") }),
                    &token,
                )
                .await
            })
        })
        .collect();

    let mut ok = 0;
    let mut rejected = 0;
    for handle in handles {
        let res = handle.await.unwrap();
        match res.status {
            200 => ok += 1,
            400 => {
                assert_eq!(res.body["code"], "BAD_REQUEST");
                rejected += 1;
            }
            other => panic!("Unexpected status {other}: {}", res.text),
        }
    }

    assert_eq!(ok, 2);
    assert_eq!(rejected, 3);
    assert_eq!(app.credits_of("racer").await, 0);
    assert_eq!(app.icons_of("racer").await.len(), 2);
}

#[tokio::test]
async fn generate_stores_trimmed_prompt() {
    let app = TestApp::spawn().await;
    let token = app.create_user_with_credits("tidy", 1).await;

    let res = app
        .post_with_token(GENERATE_ICON, &json!({ "prompt": "  a red fox \n" }), &token)
        .await;
    assert_eq!(res.status, 200, "Generate failed: {}", res.text);

    let icons = app.icons_of("tidy").await;
    assert_eq!(icons[0].prompt, "a red fox");
}
