use axum::{extract::State, Json};
use serde_json::Value;

use crate::app::AppState;
use crate::commands::repo::{self, RepoAccount, RepoListQuery, RepoRepository, RepoType};
use crate::commands::BuildCommand;
use crate::error::ApiResult;
use crate::middleware::{ApiJson, ApiPath, ApiQuery};

use super::dispatch;

/// POST /repo/repository/add
pub async fn repository_add(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<RepoRepository>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, body.add()).await
}

/// DELETE /repo/repository/:repo_type/:repo_name
pub async fn repository_del(
    State(state): State<AppState>,
    ApiPath((repo_type, repo_name)): ApiPath<(RepoType, String)>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, repo::repository_del(repo_type, repo_name)).await
}

/// PUT /repo/repository/change
pub async fn repository_change(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<RepoRepository>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, body.change()).await
}

/// POST /repo/account/add
pub async fn account_add(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<RepoAccount>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, body.add()).await
}

/// DELETE /repo/account/:repo_type/:repo_name/:repo_username
pub async fn account_del(
    State(state): State<AppState>,
    ApiPath((repo_type, repo_name, repo_username)): ApiPath<(RepoType, String, String)>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, repo::account_del(repo_type, repo_name, repo_username)).await
}

/// PUT /repo/account/passwd
pub async fn account_passwd(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<RepoAccount>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, body.passwd()).await
}

/// GET /repo/list?repo_type=&repo_name=
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<RepoListQuery>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, query.build()?).await
}
