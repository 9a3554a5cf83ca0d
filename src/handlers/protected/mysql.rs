use axum::{extract::State, Json};
use serde_json::Value;

use crate::app::AppState;
use crate::commands::mysql::{
    self, MysqlAccessAdd, MysqlDbAdd, MysqlPasswd, MysqlPrivileges, MysqlUserAdd,
};
use crate::commands::BuildCommand;
use crate::error::ApiResult;
use crate::middleware::{ApiJson, ApiPath};

use super::dispatch;

/// POST /mysql/db/add
pub async fn db_add(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<MysqlDbAdd>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, body.build()?).await
}

/// DELETE /mysql/db/:database_name
pub async fn db_del(
    State(state): State<AppState>,
    ApiPath(database_name): ApiPath<String>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, mysql::db_del(database_name)).await
}

/// POST /mysql/user/add
pub async fn user_add(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<MysqlUserAdd>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, body.build()?).await
}

/// DELETE /mysql/user/:user_name
pub async fn user_del(
    State(state): State<AppState>,
    ApiPath(user_name): ApiPath<String>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, mysql::user_del(user_name)).await
}

/// POST /mysql/access/add
pub async fn access_add(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<MysqlAccessAdd>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, body.build()?).await
}

/// DELETE /mysql/access/:account where account is `user@host`
pub async fn access_del(
    State(state): State<AppState>,
    ApiPath(account): ApiPath<String>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, mysql::access_del(&account)?).await
}

/// PUT /mysql/privileges
pub async fn privileges(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<MysqlPrivileges>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, body.build()?).await
}

/// PUT /mysql/passwd
pub async fn passwd(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<MysqlPasswd>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, body.build()?).await
}

/// GET /mysql/list
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    dispatch(&state, mysql::list()).await
}
