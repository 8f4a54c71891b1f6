//! 路由表

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use super::users::{handler, AppState};
use crate::core::middleware::{cors_layer, request_logging_middleware};

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/users", get(handler::get_all_users))
        .route("/api/user/:id", get(handler::get_user))
        .route("/api/newuser", post(handler::create_user))
        .route("/api/updateuser/:id", put(handler::update_user))
        .route("/api/deleteuser/:id", delete(handler::delete_user))
        .route("/health", get(handler::health_check))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(cors_layer())
        .with_state(state)
}
