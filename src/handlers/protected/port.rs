use axum::{extract::State, Json};
use serde_json::Value;

use crate::app::AppState;
use crate::commands::port::{self, PortAdd, PortType};
use crate::commands::BuildCommand;
use crate::error::ApiResult;
use crate::middleware::{ApiJson, ApiPath};

use super::dispatch;

/// POST /port/add
pub async fn add(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<PortAdd>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, body.build()?).await
}

/// DELETE /port/:type/:port
pub async fn del(
    State(state): State<AppState>,
    ApiPath((port_type, port_number)): ApiPath<(PortType, u16)>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, port::del(port_type, port_number)).await
}

/// GET /port/list
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    dispatch(&state, port::list()).await
}
