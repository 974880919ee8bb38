//! # Tickbox Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`auth`]: session secret, cookie settings and password hash cost
//! - [`server`]: HTTP bind address
//!
//! # Example
//!
//! ```ignore
//! use tickbox_config::{AuthConfig, ServerConfig};
//!
//! let auth_config = AuthConfig::from_env()?;
//! let server_config = ServerConfig::from_env();
//! ```

pub mod auth;
pub mod server;

pub use auth::{AuthConfig, ConfigError, MIN_SECRET_LEN, password_hash_cost_from_env};
pub use server::ServerConfig;
