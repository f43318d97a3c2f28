//! Middleware for request processing.
//!
//! # Modules
//!
//! - [`auth`]: request-scoped bearer token and the [`BearerSubjectProvider`](auth::BearerSubjectProvider)
//! - [`guard`]: route guard enforcement and guard fallbacks
//!
//! # Authorization Flow
//!
//! 1. Client sends request with `Authorization: Bearer <token>` header
//! 2. `enforce_route_guards` puts the token in scope and runs every guard
//!    bound to the request path
//! 3. A failing guard answers with its fallback or a 403
//! 4. Otherwise the handler runs, still inside the token scope, and may call
//!    the gate itself
//!
//! # Example
//!
//! ```ignore
//! async fn get_post(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
//!     let can_delete = state.gate.has_permission("delete", false)?;
//!     // ...
//! }
//! ```

pub mod auth;
pub mod guard;
