//! Tickbox Observability
//!
//! - [`init_tracing`]: installs the global `tracing` subscriber
//! - [`logging_middleware`]: per-request access log with a generated request id
//!
//! # Examples
//!
//! ```no_run
//! use axum::{Router, middleware};
//! use tickbox_observability::{init_tracing, logging_middleware};
//!
//! init_tracing();
//! let app: Router = Router::new().layer(middleware::from_fn(logging_middleware));
//! ```

mod logging;

pub use logging::{LogFormat, init_tracing, logging_middleware};
