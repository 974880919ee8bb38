//! # Tickbox Core
//!
//! Foundational types shared by every Tickbox crate:
//!
//! - [`errors`]: the HTTP-aware [`AppError`]
//! - [`password`]: one-way adaptive password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use tickbox_core::{AppError, hash_password, verify_password};
//!
//! let hash = hash_password("pw123")?;
//! assert!(verify_password("pw123", &hash)?);
//!
//! let err = AppError::unauthorized("unauthenticated");
//! ```

pub mod errors;
pub mod password;

pub use errors::AppError;
pub use password::{hash_password, hash_password_with_cost, verify_password};
