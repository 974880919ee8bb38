//! # Tickbox Models
//!
//! Domain models and request/response DTOs.
//!
//! - [`users`]: the stored credential record and its public projection
//! - [`auth`]: login, registration and session payloads

pub mod auth;
pub mod users;

pub use auth::{LoginRequest, MessageResponse, RegisterRequest, SessionResponse};
pub use users::{User, UserResponse};
