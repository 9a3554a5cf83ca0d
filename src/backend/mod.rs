pub mod client;
pub mod error;

use async_trait::async_trait;
use serde_json::{Map, Value};

pub use client::SocketClient;
pub use error::{BackendError, BackendResult};

/// Anything that can run one devil command and hand back its JSON reply.
///
/// The socket client is the production implementation; the HTTP layer only
/// depends on this trait.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn call(&self, args: &[String]) -> BackendResult<Map<String, Value>>;
}
