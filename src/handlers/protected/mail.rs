use axum::{extract::State, Json};
use serde_json::Value;

use crate::app::AppState;
use crate::commands::mail::{
    self, DkimDnsQuery, MailAccountAdd, MailAliasAdd, MailDomain, MailListQuery, MailOptions,
    MailPasswd, MailQuota,
};
use crate::commands::BuildCommand;
use crate::error::ApiResult;
use crate::middleware::{ApiJson, ApiPath, ApiQuery};

use super::dispatch;

/// POST /mail/account/add
pub async fn account_add(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<MailAccountAdd>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, body.build()?).await
}

/// DELETE /mail/account/:email_mailbox
pub async fn account_del(
    State(state): State<AppState>,
    ApiPath(email_mailbox): ApiPath<String>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, mail::account_del(email_mailbox)).await
}

/// POST /mail/alias/add
pub async fn alias_add(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<MailAliasAdd>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, body.build()?).await
}

/// DELETE /mail/alias/:email_from
pub async fn alias_del(
    State(state): State<AppState>,
    ApiPath(email_from): ApiPath<String>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, mail::alias_del(email_from)).await
}

/// PUT /mail/passwd
pub async fn passwd(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<MailPasswd>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, body.build()?).await
}

/// PUT /mail/options
pub async fn options(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<MailOptions>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, body.build()?).await
}

/// PUT /mail/quota
pub async fn quota(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<MailQuota>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, body.build()?).await
}

/// GET /mail/list?email_domain=
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<MailListQuery>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, mail::list(query)).await
}

/// POST /mail/whitelist/add
pub async fn whitelist_add(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<MailDomain>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, mail::whitelist_add(body)).await
}

/// DELETE /mail/whitelist/:domain
pub async fn whitelist_del(
    State(state): State<AppState>,
    ApiPath(domain): ApiPath<String>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, mail::whitelist_del(domain)).await
}

/// GET /mail/whitelist/list
pub async fn whitelist_list(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    dispatch(&state, mail::whitelist_list()).await
}

/// POST /mail/dkim/sign
pub async fn dkim_sign(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<MailDomain>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, mail::dkim_sign(body)).await
}

/// GET /mail/dkim/dns/:domain?print_record=
pub async fn dkim_dns(
    State(state): State<AppState>,
    ApiPath(domain): ApiPath<String>,
    ApiQuery(query): ApiQuery<DkimDnsQuery>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, mail::dkim_dns(domain, query)).await
}

/// DELETE /mail/dkim/unsign/:domain
pub async fn dkim_unsign(
    State(state): State<AppState>,
    ApiPath(domain): ApiPath<String>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, mail::dkim_unsign(domain)).await
}
