//! # Warden
//!
//! Role and permission gate for Axum services.
//!
//! Warden asks the currently authenticated subject whether it holds named
//! roles, permissions or abilities, and registers route guards that reject a
//! request with `403 Forbidden` (or a configured fallback) when a check fails.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── warden-core/     # NameSet, GuardIdentity, Subject contracts, AppError
//! ├── warden-config/   # JwtConfig, ServerConfig
//! └── warden-auth/     # JWT claims, token issue/verify, ClaimsSubject
//! src/
//! ├── gate.rs          # AuthorizationGate, GuardSpec, GuardOutcome
//! ├── guards.rs        # GuardRouter contract, GuardTable
//! ├── middleware/      # request-scoped subject, guard enforcement
//! ├── cli/             # helpers behind warden-cli
//! ├── controller.rs    # demo handlers
//! ├── router.rs        # demo routes and their guards
//! └── state.rs         # shared application state
//! ```
//!
//! ## Guards
//!
//! | Variant | Default `require_all` | Passes when |
//! |---------|-----------------------|-------------|
//! | `route_needs_role` | `true` | the role check passes |
//! | `route_needs_permission` | `true` | the permission check passes |
//! | `route_needs_role_or_permission` | `false` | role AND permission with `require_all`, role OR permission without |
//!
//! Each guard is registered under an identity built from its names and a
//! short digest of its route pattern: `admin_` followed by six hex
//! characters for a guard on role `admin`.
//!
//! ## Quick Start
//!
//! ```bash
//! JWT_SECRET=your-secure-secret-key
//! JWT_ACCESS_EXPIRY=3600
//! cargo run --bin warden
//! cargo run --bin warden-cli -- token -s user-1 -e a@b.c --roles admin
//! ```

pub mod cli;
pub mod controller;
pub mod gate;
pub mod guards;
pub mod logging;
pub mod middleware;
pub mod router;
pub mod state;

// Re-export workspace crates for convenience
pub use warden_auth;
pub use warden_config;
pub use warden_core;
