use std::sync::Arc;

use warden_config::JwtConfig;

use crate::gate::AuthorizationGate;
use crate::guards::{GuardTable, GuardTableError};
use crate::middleware::auth::BearerSubjectProvider;
use crate::middleware::guard::Fallback;
use crate::router::register_route_guards;

/// The gate used by the HTTP application.
pub type AppGate = AuthorizationGate<BearerSubjectProvider, GuardTable<Fallback>>;

#[derive(Clone, Debug)]
pub struct AppState {
    pub gate: Arc<AppGate>,
    pub jwt_config: JwtConfig,
}

/// Build the gate, register the application's route guards and wrap it for sharing.
pub fn init_app_state(jwt_config: JwtConfig) -> Result<AppState, GuardTableError> {
    let mut gate = AuthorizationGate::new(
        BearerSubjectProvider::new(jwt_config.clone()),
        GuardTable::new(),
    );
    register_route_guards(&mut gate)?;

    Ok(AppState {
        gate: Arc::new(gate),
        jwt_config,
    })
}
