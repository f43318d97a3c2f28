use axum::{Router, middleware, routing::get};

use crate::controller::{
    admin_dashboard, denied, get_post, health, me, my_ability, reports_summary,
};
use crate::guards::GuardTableError;
use crate::logging::logging_middleware;
use crate::middleware::guard::{Fallback, enforce_route_guards};
use crate::state::{AppGate, AppState};

/// Route guards of the demo application.
///
/// - `api/admin/*`: role `admin`
/// - `api/reports/*`: permission `reports:view`
/// - `api/posts/*`: role `editor` or permission `edit`/`delete`, otherwise
///   redirect to `/denied`
pub fn register_route_guards(gate: &mut AppGate) -> Result<(), GuardTableError> {
    gate.route_needs_role("api/admin/*", "admin", None, true)?;
    gate.route_needs_permission("api/reports/*", "reports:view", None, true)?;
    gate.route_needs_role_or_permission(
        "api/posts/*",
        "editor",
        ["edit", "delete"],
        Some(Fallback::redirect("/denied")),
        false,
    )?;

    Ok(())
}

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/denied", get(denied))
        .route("/api/me", get(me))
        .route("/api/me/ability", get(my_ability))
        .route("/api/admin/dashboard", get(admin_dashboard))
        .route("/api/reports/summary", get(reports_summary))
        .route("/api/posts/{id}", get(get_post))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            enforce_route_guards,
        ))
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}
