//! # Warden Config
//!
//! Configuration types for Warden, loaded from environment variables:
//!
//! - [`jwt`]: access token signing configuration
//! - [`server`]: HTTP bind address for the demo server
//!
//! # Example
//!
//! ```ignore
//! use warden_config::{JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use jwt::JwtConfig;
pub use server::ServerConfig;
