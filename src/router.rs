use axum::{Router, middleware};
use tickbox_observability::logging_middleware;

use crate::middleware::auth::require_auth;
use crate::modules::auth::router::init_auth_router;
use crate::modules::users::router::init_users_router;
use crate::state::AppState;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .nest(
            "/api",
            Router::new().nest("/auth", init_auth_router()).merge(
                init_users_router()
                    .route_layer(middleware::from_fn_with_state(state.clone(), require_auth)),
            ),
        )
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
}
