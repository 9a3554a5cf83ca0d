pub mod auth;
pub mod extract;

pub use auth::{api_key_auth, extract_credential};
pub use extract::{ApiJson, ApiPath, ApiQuery};
