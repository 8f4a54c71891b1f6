//! 用户处理器

use axum::{
    body::Bytes,
    extract::{Path, State},
    response::Json,
};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::info;

use super::{
    model::{NewUser, User},
    repository::UserStore,
};
use crate::core::{error::CoreError, response::MessageResponse};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }
}

pub async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<MessageResponse>, CoreError> {
    let payload: NewUser = decode_body(&body)?;
    let id = state.users.insert(&payload).await?;

    info!(user_id = id, "user created");
    Ok(Json(MessageResponse::new(id, "User created successfully")))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<User>, CoreError> {
    let id = parse_id(&raw_id)?;

    state
        .users
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| CoreError::NotFound(format!("User {} not found", id)))
}

pub async fn get_all_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, CoreError> {
    let users = state.users.find_all().await?;
    Ok(Json(users))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Json<MessageResponse>, CoreError> {
    let id = parse_id(&raw_id)?;
    let payload: NewUser = decode_body(&body)?;
    let rows = state.users.update(id, &payload).await?;

    info!(user_id = id, rows, "user updated");
    Ok(Json(MessageResponse::new(
        id,
        format!("Updated successfully. Not have {}", rows),
    )))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, CoreError> {
    let id = parse_id(&raw_id)?;
    let rows = state.users.delete(id).await?;

    info!(user_id = id, rows, "user deleted");
    Ok(Json(MessageResponse::new(
        id,
        format!("Deleted successfully. Rows affected {}", rows),
    )))
}

// 健康检查
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, CoreError> {
    state.users.ping().await?;

    Ok(Json(serde_json::json!({
        "status": "healthy",
        "database": "connected",
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}

pub(crate) fn parse_id(raw: &str) -> Result<i64, CoreError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|e| CoreError::BadRequest(format!("Invalid user id {:?}: {}", raw, e)))
}

// 不依赖 Content-Type，任何解码失败都映射为 400
fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, CoreError> {
    serde_json::from_slice(body)
        .map_err(|e| CoreError::BadRequest(format!("Unable to decode the request body: {}", e)))
}
