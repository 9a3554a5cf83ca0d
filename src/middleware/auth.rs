use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::app::AppState;
use crate::error::ApiError;

/// Header carrying the shared secret
pub const API_KEY_HEADER: &str = "x-api-key";

/// Address recorded when the peer address is not available
const UNKNOWN_CLIENT: &str = "unknown";

/// API key middleware that runs every protected request through the auth gate
pub async fn api_key_auth(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Response {
    let client_addr = client_address(&request);
    let credential = extract_credential(&headers);

    let outcome = state.gate.authenticate(&client_addr, credential.as_deref());
    match ApiError::from_auth_outcome(outcome) {
        Some(rejection) => rejection.into_response(),
        None => next.run(request).await,
    }
}

/// Peer IP of the TCP connection. Forwarding headers are not consulted.
fn client_address(request: &Request) -> String {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}

/// Extract the supplied credential: `X-API-Key` first, then a Bearer token
pub fn extract_credential(headers: &HeaderMap) -> Option<String> {
    let api_key = headers
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty());
    if let Some(key) = api_key {
        return Some(key.to_string());
    }

    let auth_str = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = auth_str.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(value));
        }
        map
    }

    #[test]
    fn test_api_key_header() {
        assert_eq!(
            extract_credential(&headers(&[("x-api-key", "devil")])),
            Some("devil".to_string())
        );
    }

    #[test]
    fn test_bearer_scheme_is_case_insensitive() {
        for value in ["Bearer devil", "bearer devil", "BEARER devil"] {
            let mut map = HeaderMap::new();
            map.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
            assert_eq!(extract_credential(&map), Some("devil".to_string()), "{}", value);
        }
    }

    #[test]
    fn test_api_key_takes_precedence() {
        let map = headers(&[("x-api-key", "from-header"), ("authorization", "Bearer from-bearer")]);
        assert_eq!(extract_credential(&map), Some("from-header".to_string()));
    }

    #[test]
    fn test_empty_api_key_falls_back_to_bearer() {
        let map = headers(&[("x-api-key", ""), ("authorization", "Bearer devil")]);
        assert_eq!(extract_credential(&map), Some("devil".to_string()));
    }

    #[test]
    fn test_missing_or_foreign_scheme() {
        assert_eq!(extract_credential(&HeaderMap::new()), None);
        assert_eq!(extract_credential(&headers(&[("authorization", "Basic ZGV2aWw=")])), None);
        assert_eq!(extract_credential(&headers(&[("authorization", "Bearer ")])), None);
        assert_eq!(extract_credential(&headers(&[("authorization", "Bearer")])), None);
    }
}
