//! Route guard enforcement for Axum.
//!
//! Guards are registered on the [`AuthorizationGate`] during bootstrap. This
//! middleware runs every guard bound to the request path before the handler.
//!
//! # Usage with axum::middleware::from_fn_with_state
//!
//! ```rust,ignore
//! use axum::{Router, middleware};
//! use warden::middleware::guard::enforce_route_guards;
//!
//! let app = Router::new()
//!     .route("/api/admin/dashboard", get(dashboard))
//!     .layer(middleware::from_fn_with_state(state.clone(), enforce_route_guards))
//!     .with_state(state);
//! ```

use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use serde_json::json;
use tracing::debug;
use warden_core::{AppError, SubjectProvider};

use crate::gate::{AuthorizationGate, FallbackResult, GuardOutcome};
use crate::guards::GuardTable;
use crate::middleware::auth::{bearer_token, scope_bearer_token, sync_scope_bearer_token};
use crate::state::AppState;

/// Response a guard returns instead of a 403.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fallback {
    /// `303 See Other` to the given location.
    Redirect(String),
    /// The given status with a `{"error": message}` body.
    Status(StatusCode, String),
}

impl Fallback {
    pub fn redirect(location: impl Into<String>) -> Self {
        Fallback::Redirect(location.into())
    }

    pub fn status(status: StatusCode, message: impl Into<String>) -> Self {
        Fallback::Status(status, message.into())
    }
}

impl FallbackResult for Fallback {
    fn is_empty(&self) -> bool {
        match self {
            Fallback::Redirect(location) => location.is_empty(),
            Fallback::Status(_, message) => message.is_empty(),
        }
    }
}

impl IntoResponse for Fallback {
    fn into_response(self) -> Response {
        match self {
            Fallback::Redirect(location) => Redirect::to(&location).into_response(),
            Fallback::Status(status, message) => {
                (status, Json(json!({ "error": message }))).into_response()
            }
        }
    }
}

/// How the route guards answered a request.
///
/// Attached to every response passing through [`enforce_route_guards`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Fallback,
    Forbidden,
    /// The subject could not be resolved.
    Failed,
}

impl GuardDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            GuardDecision::Proceed => "proceed",
            GuardDecision::Fallback => "fallback",
            GuardDecision::Forbidden => "forbidden",
            GuardDecision::Failed => "failed",
        }
    }
}

/// Middleware that evaluates the route guards matching the request path.
///
/// The request's bearer token stays in scope while the handler runs, so
/// handlers can query the gate directly.
pub async fn enforce_route_guards(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let token = bearer_token(req.headers());
    let path = req.uri().path().to_string();

    let checked = sync_scope_bearer_token(token.clone(), || check_route_guards(&state.gate, &path));

    let (decision, mut response) = match checked {
        Ok(None) => (
            GuardDecision::Proceed,
            scope_bearer_token(token, next.run(req)).await,
        ),
        Ok(Some(response)) => (GuardDecision::Fallback, response),
        Err(err) if err.status == StatusCode::FORBIDDEN => {
            (GuardDecision::Forbidden, err.into_response())
        }
        Err(err) => (GuardDecision::Failed, err.into_response()),
    };

    response.extensions_mut().insert(decision);
    response
}

/// Evaluate every guard bound to `path`, in binding order.
///
/// Returns `Ok(None)` when the request may proceed, `Ok(Some(response))`
/// for the first guard that yields a fallback, and a 403 error for the
/// first guard without one. Provider failures are converted with
/// `AppError::from`.
pub fn check_route_guards<P, F>(
    gate: &AuthorizationGate<P, GuardTable<F>>,
    path: &str,
) -> Result<Option<Response>, AppError>
where
    P: SubjectProvider,
    AppError: From<P::Error>,
    F: FallbackResult + IntoResponse + Clone,
{
    for (identity, spec) in gate.router().matching(path) {
        match gate.evaluate(spec)? {
            GuardOutcome::Proceed => {}
            GuardOutcome::Fallback(fallback) => {
                debug!(guard = %identity, path = %path, "route guard returned fallback");
                return Ok(Some(fallback.into_response()));
            }
            GuardOutcome::Forbidden => {
                debug!(guard = %identity, path = %path, "route guard forbade request");
                return Err(AppError::forbidden());
            }
        }
    }

    Ok(None)
}
