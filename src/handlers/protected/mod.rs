// handlers/protected/mod.rs - One module per devil command group
//
// Every handler here runs behind the API key middleware, builds a command
// from its request and hands the daemon's reply back unchanged.
pub mod dns;
pub mod ftp;
pub mod info;
pub mod mail;
pub mod mongo;
pub mod mysql;
pub mod pgsql;
pub mod port;
pub mod repo;
pub mod ssl;
pub mod vhost;
pub mod www;

use axum::Json;
use serde_json::Value;

use crate::app::AppState;
use crate::commands::Command;
use crate::error::ApiResult;

/// Send `command` to the daemon and return its reply object as the body
pub async fn dispatch(state: &AppState, command: Command) -> ApiResult<Json<Value>> {
    let reply = state.backend.call(command.args()).await?;
    Ok(Json(Value::Object(reply)))
}
