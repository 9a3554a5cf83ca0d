use axum::{extract::State, Json};
use serde_json::Value;

use crate::app::AppState;
use crate::commands::info;
use crate::error::ApiResult;

use super::dispatch;

/// GET /info/limits
pub async fn limits(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    dispatch(&state, info::limits()).await
}

/// GET /info/account
pub async fn account(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    dispatch(&state, info::account()).await
}
