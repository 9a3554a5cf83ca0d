use axum::{extract::State, Json};
use serde_json::Value;

use crate::app::AppState;
use crate::commands::mongo::{self, MongoDbAdd, MongoPasswd};
use crate::commands::BuildCommand;
use crate::error::ApiResult;
use crate::middleware::{ApiJson, ApiPath};

use super::dispatch;

/// POST /mongo/db/add
pub async fn db_add(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<MongoDbAdd>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, body.build()?).await
}

/// DELETE /mongo/db/:database_name
pub async fn db_del(
    State(state): State<AppState>,
    ApiPath(database_name): ApiPath<String>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, mongo::db_del(database_name)).await
}

/// PUT /mongo/passwd
pub async fn passwd(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<MongoPasswd>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, body.build()?).await
}

/// GET /mongo/list
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    dispatch(&state, mongo::list()).await
}
