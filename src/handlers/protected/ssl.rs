use axum::{extract::State, Json};
use serde_json::Value;

use crate::app::AppState;
use crate::commands::ssl::{self, SslMailAdd, SslMailGet, SslWwwAdd, SslWwwDelQuery, SslWwwGet};
use crate::commands::BuildCommand;
use crate::error::ApiResult;
use crate::middleware::{ApiJson, ApiPath, ApiQuery};

use super::dispatch;

/// POST /ssl/www/add
pub async fn www_add(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<SslWwwAdd>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, body.build()?).await
}

/// DELETE /ssl/www/:ssl_ip?domain=
pub async fn www_del(
    State(state): State<AppState>,
    ApiPath(ssl_ip): ApiPath<String>,
    ApiQuery(query): ApiQuery<SslWwwDelQuery>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, ssl::www_del(ssl_ip, query)).await
}

/// POST /ssl/www/get
pub async fn www_get(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<SslWwwGet>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, body.build()?).await
}

/// GET /ssl/www/list
pub async fn www_list(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    dispatch(&state, ssl::www_list()).await
}

/// POST /ssl/mail/add
pub async fn mail_add(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<SslMailAdd>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, body.build()?).await
}

/// DELETE /ssl/mail/:ssl_ip
pub async fn mail_del(
    State(state): State<AppState>,
    ApiPath(ssl_ip): ApiPath<String>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, ssl::mail_del(ssl_ip)).await
}

/// POST /ssl/mail/get
pub async fn mail_get(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<SslMailGet>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, body.build()?).await
}

/// GET /ssl/mail/list
pub async fn mail_list(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    dispatch(&state, ssl::mail_list()).await
}
