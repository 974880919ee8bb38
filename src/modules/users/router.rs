use axum::{Router, routing::get};

use super::controller::{delete_me, me};
use crate::state::AppState;

pub fn init_users_router() -> Router<AppState> {
    Router::new().route("/me", get(me).delete(delete_me))
}
