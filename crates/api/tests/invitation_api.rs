//! Integration tests for invitations, vouching and teams.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, new_user, post_json, FakePlatform, Reply};
use serde_json::json;

fn invitation_row(code: &str) -> serde_json::Value {
    json!({
        "code": code,
        "email": "friend@example.com",
        "created_by": null,
        "expires_at": "2026-10-25T12:00:00Z",
        "accepted_at": null,
        "created_at": "2026-10-18T12:00:00Z"
    })
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_invitation_returns_201_with_row() {
    let platform = FakePlatform::new();
    platform.reply("create_invitation", Reply::Ok(invitation_row("AVX-1234")));
    let (_, token) = new_user();
    let app = common::build_test_app(platform.clone());

    let response = post_json(
        app,
        "/api/invitations",
        json!({ "email": "friend@example.com" }),
        Some(&token),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "AVX-1234");
    assert_eq!(json["expiresAt"], "2026-10-25T12:00:00Z");

    assert_eq!(
        platform.rpc_params("create_invitation"),
        vec![json!({ "p_email": "friend@example.com", "p_expires_in_days": 7 })]
    );
}

#[tokio::test]
async fn create_invitation_validates_input() {
    let platform = FakePlatform::new();
    let (_, token) = new_user();

    for body in [
        json!({ "email": "not-an-email" }),
        json!({ "expiresInDays": 0 }),
        json!({ "expiresInDays": 31 }),
    ] {
        let app = common::build_test_app(platform.clone());
        let response = post_json(app, "/api/invitations", body.clone(), Some(&token)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
    }

    assert_eq!(platform.call_count(), 0);
}

// ---------------------------------------------------------------------------
// Accept
// ---------------------------------------------------------------------------

#[tokio::test]
async fn accept_invitation_succeeds() {
    let platform = FakePlatform::new();
    platform.reply("accept_invitation", Reply::Ok(json!(true)));
    let (user_id, token) = new_user();
    let app = common::build_test_app(platform.clone());

    let response = post_json(
        app,
        "/api/invitations/accept",
        json!({ "code": " AVX-1234 " }),
        Some(&token),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "accepted": true }));
    assert_eq!(
        platform.rpc_params("accept_invitation"),
        vec![json!({ "p_code": "AVX-1234", "p_user_id": user_id.to_string() })]
    );
}

#[tokio::test]
async fn rejected_invitation_is_400() {
    let platform = FakePlatform::new();
    platform.reply("accept_invitation", Reply::Ok(json!(false)));
    let (_, token) = new_user();
    let app = common::build_test_app(platform);

    let response = post_json(
        app,
        "/api/invitations/accept",
        json!({ "code": "EXPIRED" }),
        Some(&token),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Invalid or expired invitation");
}

#[tokio::test]
async fn blank_invitation_code_is_rejected_locally() {
    let platform = FakePlatform::new();
    let (_, token) = new_user();
    let app = common::build_test_app(platform.clone());

    let response = post_json(
        app,
        "/api/invitations/accept",
        json!({ "code": "   " }),
        Some(&token),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
    assert!(platform.rpc_params("accept_invitation").is_empty());
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[tokio::test]
async fn own_invitations_are_listed() {
    let platform = FakePlatform::new();
    let (user_id, token) = new_user();
    let mut mine = invitation_row("MINE");
    mine["created_by"] = json!(user_id.to_string());
    let mut theirs = invitation_row("THEIRS");
    theirs["created_by"] = json!(uuid::Uuid::new_v4().to_string());
    platform.seed("invitations", vec![mine, theirs]);
    let app = common::build_test_app(platform);

    let response = get_auth(app, "/api/invitations", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["code"], "MINE");
}

// ---------------------------------------------------------------------------
// Vouch
// ---------------------------------------------------------------------------

#[tokio::test]
async fn vouch_forwards_both_ids() {
    let platform = FakePlatform::new();
    let (voucher, token) = new_user();
    let vouchee = uuid::Uuid::new_v4();
    let app = common::build_test_app(platform.clone());

    let response = post_json(app, "/api/vouch", json!({ "userId": vouchee }), Some(&token)).await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(
        platform.rpc_params("vouch_for_user"),
        vec![json!({
            "p_voucher_id": voucher.to_string(),
            "p_vouchee_id": vouchee.to_string()
        })]
    );
}

#[tokio::test]
async fn vouch_without_user_id_is_400() {
    let platform = FakePlatform::new();
    let (_, token) = new_user();
    let app = common::build_test_app(platform.clone());

    let response = post_json(app, "/api/vouch", json!({}), Some(&token)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].as_str().unwrap().contains("userId"));
    assert_eq!(platform.call_count(), 0);
}

#[tokio::test]
async fn self_vouch_is_rejected_locally() {
    let platform = FakePlatform::new();
    let (user_id, token) = new_user();
    let app = common::build_test_app(platform.clone());

    let response = post_json(app, "/api/vouch", json!({ "userId": user_id }), Some(&token)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(platform.call_count(), 0);
}

// ---------------------------------------------------------------------------
// Teams
// ---------------------------------------------------------------------------

#[tokio::test]
async fn teams_are_read_through_membership() {
    let platform = FakePlatform::new();
    let (user_id, token) = new_user();
    platform.seed(
        "team_members",
        vec![json!({
            "user_id": user_id.to_string(),
            "teams": {
                "id": uuid::Uuid::new_v4().to_string(),
                "name": "Superachievers",
                "description": null,
                "created_at": null
            }
        })],
    );
    let app = common::build_test_app(platform);

    let response = get_auth(app, "/api/teams", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"][0]["name"], "Superachievers");
}
