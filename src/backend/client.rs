//! Connect-per-call client for the devil UNIX domain socket.
//!
//! The daemon accepts one JSON array of string arguments, newline terminated,
//! and answers with one JSON object before closing its side of the stream.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::UnixStream;
use tokio::time::timeout;

use super::error::{BackendError, BackendResult};
use super::Backend;
use crate::config::BackendConfig;

/// Discriminator field carried by every daemon reply
pub const STATUS_FIELD: &str = "code";

/// Discriminator value the daemon uses for application errors
pub const ERROR_STATUS: &str = "ERROR";

/// Human-readable message field of an error reply
pub const MESSAGE_FIELD: &str = "msg";

/// Used when an error reply carries no usable message
pub const FALLBACK_ERROR_MESSAGE: &str = "devil/error";

/// Maximum number of characters of a malformed reply kept for diagnostics
const EXCERPT_CHARS: usize = 200;

#[derive(Debug, Clone)]
pub struct SocketClient {
    socket_path: PathBuf,
    timeout: Duration,
}

impl SocketClient {
    pub fn new(socket_path: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            socket_path: socket_path.into(),
            timeout,
        }
    }

    pub fn from_config(config: &BackendConfig) -> Self {
        Self::new(config.socket_path.clone(), config.timeout())
    }

    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    /// Run one command against the daemon.
    ///
    /// A fresh connection is opened for every call and released before this
    /// returns, whatever the outcome. No retries are attempted.
    pub async fn execute(&self, args: &[String]) -> BackendResult<Map<String, Value>> {
        let payload = encode_request(args)?;

        let mut stream = self.connect().await?;
        let outcome = self.exchange(&mut stream, &payload).await;
        release(stream).await;

        decode_response(&outcome?)
    }

    async fn connect(&self) -> BackendResult<UnixStream> {
        timeout(self.timeout, UnixStream::connect(&self.socket_path))
            .await
            .map_err(|_| {
                BackendError::connection(format!(
                    "Cannot connect to devil socket: timed out after {:?}",
                    self.timeout
                ))
            })?
            .map_err(|e| BackendError::connection(format!("Cannot connect to devil socket: {}", e)))
    }

    /// Write the request and read until the daemon closes the stream
    async fn exchange(&self, stream: &mut UnixStream, payload: &[u8]) -> BackendResult<Vec<u8>> {
        let round_trip = async {
            stream.write_all(payload).await?;
            stream.flush().await?;

            let mut raw = Vec::new();
            stream.read_to_end(&mut raw).await?;
            Ok::<_, std::io::Error>(raw)
        };

        match timeout(self.timeout, round_trip).await {
            Ok(Ok(raw)) => Ok(raw),
            Ok(Err(e)) => Err(BackendError::connection(format!(
                "Devil socket I/O error: {}",
                e
            ))),
            Err(_) => Err(BackendError::connection("Timeout waiting for devil response")),
        }
    }
}

#[async_trait]
impl Backend for SocketClient {
    async fn call(&self, args: &[String]) -> BackendResult<Map<String, Value>> {
        // Arguments may carry passwords; only the command group is logged
        tracing::debug!(
            socket = %self.socket_path.display(),
            command = args.get(1).map(String::as_str).unwrap_or(""),
            "devil call"
        );
        self.execute(args).await
    }
}

async fn release(mut stream: UnixStream) {
    if let Err(e) = stream.shutdown().await {
        tracing::debug!("Error closing devil socket: {}", e);
    }
}

/// Serialize the argument list as a newline-terminated JSON array
pub fn encode_request(args: &[String]) -> BackendResult<Vec<u8>> {
    let mut payload = serde_json::to_vec(args)
        .map_err(|e| BackendError::protocol(format!("Cannot encode devil request: {}", e)))?;
    payload.push(b'\n');
    Ok(payload)
}

/// Decode and classify a complete daemon reply
pub fn decode_response(raw: &[u8]) -> BackendResult<Map<String, Value>> {
    if raw.is_empty() {
        return Err(BackendError::protocol("Empty response from devil socket"));
    }

    let text = String::from_utf8_lossy(raw);
    let text = text.trim();

    let value: Value = serde_json::from_str(text).map_err(|_| {
        BackendError::protocol(format!("Invalid JSON from devil socket: {}", excerpt(text)))
    })?;

    let Value::Object(object) = value else {
        return Err(BackendError::protocol(
            "Devil response must be a JSON object",
        ));
    };

    if object.get(STATUS_FIELD).and_then(Value::as_str) == Some(ERROR_STATUS) {
        return Err(BackendError::command(error_message(&object)));
    }

    Ok(object)
}

fn error_message(object: &Map<String, Value>) -> String {
    match object.get(MESSAGE_FIELD) {
        Some(Value::String(msg)) if !msg.trim().is_empty() => msg.clone(),
        Some(Value::Null) | Some(Value::String(_)) | None => FALLBACK_ERROR_MESSAGE.to_string(),
        Some(other) => other.to_string(),
    }
}

fn excerpt(text: &str) -> &str {
    match text.char_indices().nth(EXCERPT_CHARS) {
        Some((cut, _)) => &text[..cut],
        None => text,
    }
}
