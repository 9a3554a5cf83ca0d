use axum::{extract::State, Json};
use serde_json::Value;

use crate::app::AppState;
use crate::commands::ftp::{self, FtpAdd, FtpPasswd, FtpQuota};
use crate::commands::BuildCommand;
use crate::error::ApiResult;
use crate::middleware::{ApiJson, ApiPath};

use super::dispatch;

/// POST /ftp/add
pub async fn add(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<FtpAdd>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, body.build()?).await
}

/// DELETE /ftp/:username
pub async fn del(
    State(state): State<AppState>,
    ApiPath(username): ApiPath<String>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, ftp::del(username)).await
}

/// PUT /ftp/passwd
pub async fn passwd(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<FtpPasswd>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, body.build()?).await
}

/// PUT /ftp/quota
pub async fn quota(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<FtpQuota>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, body.build()?).await
}

/// GET /ftp/list
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    dispatch(&state, ftp::list()).await
}
