mod common;

use axum::http::{StatusCode, header};
use common::{body_json, get_request, setup_test_app, setup_test_state, token_for};
use tower::ServiceExt;
use warden::middleware::guard::GuardDecision;
use warden_core::route_digest;

#[tokio::test]
async fn test_health_is_public() {
    let app = setup_test_app();

    let response = app.oneshot(get_request("/health", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_admin_role_reaches_dashboard() {
    let app = setup_test_app();
    let token = token_for(&["admin"], &[]);

    let response = app
        .oneshot(get_request("/api/admin/dashboard", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["dashboard"], "admin");
}

#[tokio::test]
async fn test_missing_role_is_forbidden() {
    let app = setup_test_app();
    let token = token_for(&[], &[]);

    let response = app
        .oneshot(get_request("/api/admin/dashboard", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Forbidden");
}

#[tokio::test]
async fn test_anonymous_request_is_forbidden() {
    let app = setup_test_app();

    let response = app
        .oneshot(get_request("/api/admin/dashboard", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_invalid_token_is_unauthorized() {
    let app = setup_test_app();

    let response = app
        .oneshot(get_request("/api/admin/dashboard", Some("not-a-jwt")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_edit_permission_passes_post_guard() {
    let app = setup_test_app();
    let token = token_for(&[], &["edit"]);

    let response = app
        .oneshot(get_request("/api/posts/7", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["id"], 7);
    assert_eq!(body["can_delete"], false);
    assert_eq!(body["can_publish"], false);
}

#[tokio::test]
async fn test_handler_sees_request_subject() {
    let app = setup_test_app();
    let token = token_for(&["editor"], &["delete", "publish"]);

    let response = app
        .oneshot(get_request("/api/posts/7", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["can_delete"], true);
    assert_eq!(body["can_publish"], true);
}

#[tokio::test]
async fn test_failed_post_guard_redirects_to_fallback() {
    let app = setup_test_app();
    let token = token_for(&["viewer"], &["comment"]);

    let response = app
        .oneshot(get_request("/api/posts/7", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/denied");
}

#[tokio::test]
async fn test_permission_guard_on_reports() {
    let app = setup_test_app();

    let allowed = token_for(&[], &["reports:view"]);
    let response = app
        .clone()
        .oneshot(get_request("/api/reports/summary", Some(&allowed)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let refused = token_for(&["admin"], &[]);
    let response = app
        .oneshot(get_request("/api/reports/summary", Some(&refused)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_me_requires_subject() {
    let app = setup_test_app();

    let response = app.oneshot(get_request("/api/me", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_returns_claims() {
    let app = setup_test_app();
    let token = token_for(&["editor"], &["edit"]);

    let response = app
        .oneshot(get_request("/api/me", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["sub"], "test-user");
    assert_eq!(body["roles"][0], "editor");
    assert_eq!(body["permissions"][0], "edit");
}

#[tokio::test]
async fn test_ability_report() {
    let app = setup_test_app();
    let token = token_for(&["editor"], &["edit"]);

    let response = app
        .oneshot(get_request(
            "/api/me/ability?roles=editor,admin&permissions=edit,delete&validate_all=true",
            Some(&token),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["granted"], false);
    assert_eq!(body["roles"]["editor"], true);
    assert_eq!(body["roles"]["admin"], false);
    assert_eq!(body["permissions"]["edit"], true);
    assert_eq!(body["permissions"]["delete"], false);
}

#[tokio::test]
async fn test_guard_decision_attached_to_response() {
    let app = setup_test_app();
    let cases = [
        ("/health", None, GuardDecision::Proceed),
        ("/api/admin/dashboard", None, GuardDecision::Forbidden),
        (
            "/api/admin/dashboard",
            Some("not-a-jwt".to_string()),
            GuardDecision::Failed,
        ),
        (
            "/api/posts/7",
            Some(token_for(&["viewer"], &[])),
            GuardDecision::Fallback,
        ),
    ];

    for (uri, token, expected) in cases {
        let response = app
            .clone()
            .oneshot(get_request(uri, token.as_deref()))
            .await
            .unwrap();
        assert_eq!(
            response.extensions().get::<GuardDecision>(),
            Some(&expected),
            "{uri}"
        );
    }
}

#[test]
fn test_registered_guard_identities() {
    let state = setup_test_state();
    let identities: Vec<String> = state
        .gate
        .router()
        .bindings()
        .map(|(_, identity)| identity.to_string())
        .collect();

    assert_eq!(
        identities,
        vec![
            format!("admin_{}", route_digest("api/admin/*")),
            format!("reports:view_{}", route_digest("api/reports/*")),
            format!("editor_edit_delete_{}", route_digest("api/posts/*")),
        ]
    );
}
