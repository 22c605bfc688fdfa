//! Integration tests for onboarding progress and activity logging.

mod common;

use assert_matches::assert_matches;
use axum::http::StatusCode;
use common::{body_json, get_auth, new_user, post_json, FakePlatform, RecordedCall};
use serde_json::json;

#[tokio::test]
async fn new_user_has_no_progress() {
    let platform = FakePlatform::new();
    let (_, token) = new_user();
    let app = common::build_test_app(platform);

    let response = get_auth(app, "/api/onboarding", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "completedSteps": [], "onboardingDone": false, "nextStep": "profile" })
    );
}

#[tokio::test]
async fn completing_a_step_upserts_the_row() {
    let platform = FakePlatform::new();
    let (user_id, token) = new_user();
    let app = common::build_test_app(platform.clone());

    let response = post_json(
        app,
        "/api/onboarding",
        json!({ "step": "interests" }),
        Some(&token),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["completedSteps"], json!(["interests"]));
    assert_eq!(json["onboardingDone"], false);
    assert_eq!(json["nextStep"], "profile");

    let upserts: Vec<_> = platform
        .calls()
        .into_iter()
        .filter(|c| matches!(c, RecordedCall::Insert { .. }))
        .collect();
    assert_matches!(
        &upserts[..],
        [RecordedCall::Insert { table, row, on_conflict: Some(column), .. }]
            if table == "user_onboarding"
                && column == "user_id"
                && row["user_id"] == user_id.to_string()
    );
}

#[tokio::test]
async fn last_step_in_any_order_finishes_onboarding() {
    let platform = FakePlatform::new();
    let (user_id, token) = new_user();
    platform.seed(
        "user_onboarding",
        vec![json!({
            "user_id": user_id.to_string(),
            "completed_steps": ["celebrate", "explore", "profile", "explore", "group"]
        })],
    );
    let app = common::build_test_app(platform.clone());

    let response = post_json(
        app,
        "/api/onboarding",
        json!({ "step": "interests" }),
        Some(&token),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["onboardingDone"], true);
    assert_eq!(json["nextStep"], serde_json::Value::Null);

    // The upsert replaced the row rather than adding a second one.
    assert_eq!(platform.rows("user_onboarding").len(), 1);
}

#[tokio::test]
async fn steps_completed_one_after_another_accumulate() {
    let platform = FakePlatform::new();
    let (_, token) = new_user();
    let app = common::build_test_app(platform.clone());

    for step in ["profile", "group"] {
        let response =
            post_json(app.clone(), "/api/onboarding", json!({ "step": step }), Some(&token)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let rows = platform.rows("user_onboarding");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["completed_steps"], json!(["profile", "group"]));
}

#[tokio::test]
async fn repeating_a_step_does_not_duplicate_it() {
    let platform = FakePlatform::new();
    let (user_id, token) = new_user();
    platform.seed(
        "user_onboarding",
        vec![json!({ "user_id": user_id.to_string(), "completed_steps": ["profile"] })],
    );
    let app = common::build_test_app(platform);

    let response = post_json(
        app,
        "/api/onboarding",
        json!({ "step": "profile" }),
        Some(&token),
    )
    .await;

    assert_eq!(body_json(response).await["completedSteps"], json!(["profile"]));
}

#[tokio::test]
async fn unknown_step_is_rejected_before_remote_calls() {
    let platform = FakePlatform::new();
    let (_, token) = new_user();
    let app = common::build_test_app(platform.clone());

    let response = post_json(
        app,
        "/api/onboarding",
        json!({ "step": "skydiving" }),
        Some(&token),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    assert_eq!(platform.call_count(), 0);
}

// ---------------------------------------------------------------------------
// Activity log
// ---------------------------------------------------------------------------

#[tokio::test]
async fn activity_is_logged_for_the_caller() {
    let platform = FakePlatform::new();
    let (user_id, token) = new_user();
    let app = common::build_test_app(platform.clone());

    let response = post_json(
        app,
        "/api/activity",
        json!({ "action": "viewed_superpuzzle", "metadata": { "id": 7 } }),
        Some(&token),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let rows = platform.rows("user_activity_logs");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["user_id"], user_id.to_string());
    assert_eq!(rows[0]["action"], "viewed_superpuzzle");
    assert_eq!(rows[0]["metadata"]["id"], 7);
}

#[tokio::test]
async fn empty_activity_action_is_rejected() {
    let platform = FakePlatform::new();
    let (_, token) = new_user();
    let app = common::build_test_app(platform.clone());

    let response = post_json(app, "/api/activity", json!({ "action": "" }), Some(&token)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    assert_eq!(platform.call_count(), 0);
}
