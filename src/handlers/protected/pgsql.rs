use axum::{extract::State, Json};
use serde_json::Value;

use crate::app::AppState;
use crate::commands::pgsql::{self, PgsqlDbAdd, PgsqlExtension, PgsqlPasswd};
use crate::commands::BuildCommand;
use crate::error::ApiResult;
use crate::middleware::{ApiJson, ApiPath};

use super::dispatch;

/// POST /pgsql/db/add
pub async fn db_add(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<PgsqlDbAdd>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, body.build()?).await
}

/// DELETE /pgsql/db/:database_name
pub async fn db_del(
    State(state): State<AppState>,
    ApiPath(database_name): ApiPath<String>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, pgsql::db_del(database_name)).await
}

/// PUT /pgsql/passwd
pub async fn passwd(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<PgsqlPasswd>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, body.build()?).await
}

/// PUT /pgsql/extensions
pub async fn extensions(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<PgsqlExtension>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, body.build()?).await
}

/// GET /pgsql/list
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    dispatch(&state, pgsql::list()).await
}
