use axum::{extract::State, Json};
use serde_json::Value;

use crate::app::AppState;
use crate::commands::dns::{self, DnsAddRecord, DnsAddZone, DnsDel, DnsListQuery};
use crate::commands::BuildCommand;
use crate::error::ApiResult;
use crate::middleware::{ApiJson, ApiQuery};

use super::dispatch;

/// POST /dns/add/zone
pub async fn add_zone(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<DnsAddZone>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, body.build()?).await
}

/// POST /dns/add/record
pub async fn add_record(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<DnsAddRecord>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, body.build()?).await
}

/// GET /dns/templates
pub async fn templates(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    dispatch(&state, dns::templates()).await
}

/// GET /dns/list?dns_domain=
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<DnsListQuery>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, dns::list(query)).await
}

/// DELETE /dns/del - whole zone, or one record when `dns_record_id` is set
pub async fn del(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<DnsDel>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, body.build()?).await
}
