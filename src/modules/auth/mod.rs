pub mod controller;
pub mod error;
pub mod router;
pub mod service;

pub use error::{AuthError, Rejection};
pub use service::{AuthService, Session, TOKEN_EXPIRATION_SECS};
