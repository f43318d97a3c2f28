use std::future::Future;

use axum::http::{HeaderMap, header};
use warden_auth::{AuthError, ClaimsSubject, verify_token};
use warden_config::JwtConfig;
use warden_core::SubjectProvider;

tokio::task_local! {
    static BEARER_TOKEN: Option<String>;
}

/// Extract the bearer token from an `Authorization` header, if present.
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

/// Run `fut` with `token` as the request's bearer token.
pub async fn scope_bearer_token<Fut>(token: Option<String>, fut: Fut) -> Fut::Output
where
    Fut: Future,
{
    BEARER_TOKEN.scope(token, fut).await
}

/// Synchronous counterpart of [`scope_bearer_token`].
pub fn sync_scope_bearer_token<R, F>(token: Option<String>, f: F) -> R
where
    F: FnOnce() -> R,
{
    BEARER_TOKEN.sync_scope(token, f)
}

/// Resolves the subject from the bearer token of the in-flight request.
///
/// Outside a request scope, or when the request carries no bearer token,
/// nobody is authenticated. A token that fails verification is an error.
#[derive(Debug, Clone)]
pub struct BearerSubjectProvider {
    jwt_config: JwtConfig,
}

impl BearerSubjectProvider {
    pub fn new(jwt_config: JwtConfig) -> Self {
        Self { jwt_config }
    }
}

impl SubjectProvider for BearerSubjectProvider {
    type Subject = ClaimsSubject;
    type Error = AuthError;

    fn current_subject(&self) -> Result<Option<ClaimsSubject>, AuthError> {
        let Some(token) = BEARER_TOKEN.try_with(Clone::clone).ok().flatten() else {
            return Ok(None);
        };

        let claims = verify_token(&token, &self.jwt_config)?;
        Ok(Some(ClaimsSubject(claims)))
    }
}
