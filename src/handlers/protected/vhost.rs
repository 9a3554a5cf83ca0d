use axum::{extract::State, Json};
use serde_json::Value;

use crate::app::AppState;
use crate::commands::vhost::{self, VhostListQuery};
use crate::error::ApiResult;
use crate::middleware::ApiQuery;

use super::dispatch;

/// GET /vhost/list?vhost_type=private|public|all
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<VhostListQuery>,
) -> ApiResult<Json<Value>> {
    dispatch(&state, vhost::list(query)).await
}
