//! HTTP handlers of the demo application.
//!
//! Route-level access is decided by the guards registered in
//! [`crate::router::register_route_guards`]. Handlers below only add
//! per-request checks of their own.

use anyhow::anyhow;
use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use serde_json::{Value, json};
use warden_auth::AbilityReport;
use warden_core::{AbilityOptions, AppError, NameSet};

use crate::state::AppState;

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn denied() -> Json<Value> {
    Json(json!({ "message": "Access denied" }))
}

pub async fn me(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let subject = state
        .gate
        .subject()?
        .ok_or_else(|| AppError::unauthorized(anyhow!("Missing authorization header")))?;
    let claims = subject.claims();

    Ok(Json(json!({
        "sub": claims.sub,
        "email": claims.email,
        "roles": claims.roles,
        "permissions": claims.permissions,
    })))
}

#[derive(Debug, Deserialize)]
pub struct AbilityQuery {
    /// Comma-separated role names.
    #[serde(default)]
    pub roles: String,
    /// Comma-separated permission names.
    #[serde(default)]
    pub permissions: String,
    #[serde(default)]
    pub validate_all: bool,
}

fn split_names(raw: &str) -> NameSet {
    NameSet::from(
        raw.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect::<Vec<_>>(),
    )
}

pub async fn my_ability(
    State(state): State<AppState>,
    Query(query): Query<AbilityQuery>,
) -> Result<Json<AbilityReport>, AppError> {
    let subject = state
        .gate
        .subject()?
        .ok_or_else(|| AppError::unauthorized(anyhow!("Missing authorization header")))?;

    let options = AbilityOptions {
        validate_all: query.validate_all,
    };
    let report = subject.ability_report(
        &split_names(&query.roles),
        &split_names(&query.permissions),
        &options,
    );

    Ok(Json(report))
}

pub async fn admin_dashboard() -> Json<Value> {
    Json(json!({ "dashboard": "admin" }))
}

pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Value>, AppError> {
    let can_delete = state.gate.has_permission("delete", false)?;
    let can_publish = state
        .gate
        .ability("editor", "publish", &AbilityOptions::validate_all())?;

    Ok(Json(json!({
        "id": id,
        "can_delete": can_delete,
        "can_publish": can_publish,
    })))
}

pub async fn reports_summary() -> Json<Value> {
    Json(json!({ "reports": [] }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_names_skips_blanks() {
        assert_eq!(split_names("a, b,,c "), NameSet::from(["a", "b", "c"]));
        assert!(split_names("").is_empty());
    }
}
