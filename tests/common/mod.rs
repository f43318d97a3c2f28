use axum::body::Body;
use axum::http::{Request, Response, header};
use http_body_util::BodyExt;
use serde_json::Value;
use warden::router::init_router;
use warden::state::{AppState, init_app_state};
use warden_auth::create_access_token;
use warden_config::JwtConfig;

pub fn get_test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: 3600,
    }
}

#[allow(dead_code)]
pub fn setup_test_state() -> AppState {
    init_app_state(get_test_jwt_config()).unwrap()
}

#[allow(dead_code)]
pub fn setup_test_app() -> axum::Router {
    init_router(setup_test_state())
}

/// Access token for a subject holding exactly `roles` and `permissions`.
#[allow(dead_code)]
pub fn token_for(roles: &[&str], permissions: &[&str]) -> String {
    create_access_token(
        "test-user",
        "test@example.com",
        roles.iter().map(|r| r.to_string()).collect(),
        permissions.iter().map(|p| p.to_string()).collect(),
        &get_test_jwt_config(),
    )
    .unwrap()
}

#[allow(dead_code)]
pub fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
