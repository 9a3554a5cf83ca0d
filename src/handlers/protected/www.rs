use axum::{extract::State, Json};
use serde_json::Value;

use crate::app::AppState;
use crate::commands::www::{
    self, StatsAccessAdd, StatsAccount, StatsDomainAdd, WwwAdd, WwwDelQuery, WwwOptions,
};
use crate::commands::BuildCommand;
use crate::error::ApiResult;
use crate::middleware::{ApiJson, ApiPath, ApiQuery};

use super::dispatch;

/// POST /www/add
pub async fn add(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<WwwAdd>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, body.build()?).await
}

/// DELETE /www/del/:www_domain?remove=true
pub async fn del(
    State(state): State<AppState>,
    ApiPath(www_domain): ApiPath<String>,
    ApiQuery(query): ApiQuery<WwwDelQuery>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, www::del(www_domain, query)).await
}

/// PUT /www/options
pub async fn options(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<WwwOptions>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, body.build()?).await
}

/// POST /www/restart/:www_domain
pub async fn restart(
    State(state): State<AppState>,
    ApiPath(www_domain): ApiPath<String>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, www::restart(www_domain)).await
}

/// GET /www/list
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    dispatch(&state, www::list()).await
}

/// POST /www/stats/account/add
pub async fn stats_account_add(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<StatsAccount>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, body.add()).await
}

/// DELETE /www/stats/account/:user_name
pub async fn stats_account_del(
    State(state): State<AppState>,
    ApiPath(user_name): ApiPath<String>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, www::stats_account_del(user_name)).await
}

/// PUT /www/stats/account/passwd
pub async fn stats_account_passwd(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<StatsAccount>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, body.passwd()).await
}

/// POST /www/stats/access/add
pub async fn stats_access_add(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<StatsAccessAdd>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, body.build()?).await
}

/// DELETE /www/stats/access/:www_domain/:user_name
pub async fn stats_access_del(
    State(state): State<AppState>,
    ApiPath((www_domain, user_name)): ApiPath<(String, String)>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, www::stats_access_del(www_domain, user_name)).await
}

/// POST /www/stats/domain/add
pub async fn stats_domain_add(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<StatsDomainAdd>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, www::stats_domain_add(body)).await
}

/// DELETE /www/stats/domain/:www_domain
pub async fn stats_domain_del(
    State(state): State<AppState>,
    ApiPath(www_domain): ApiPath<String>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, www::stats_domain_del(www_domain)).await
}

/// GET /www/stats/list
pub async fn stats_list(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    dispatch(&state, www::stats_list()).await
}
