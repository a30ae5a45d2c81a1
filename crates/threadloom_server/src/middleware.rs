//! Request tracing and CORS.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Request, State};
use axum::http::{header, HeaderMap, HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use threadloom_observability::{http_request_span, record_duration};
use tracing::Instrument;
use uuid::Uuid;

use crate::config::ServerConfig;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Run each request inside an `http.request` span and echo its id back.
pub async fn trace_request(req: Request, next: Next) -> Response {
    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty() && v.len() <= 128)
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let span = http_request_span!(
        req.method().as_str(),
        req.uri().path(),
        request_id.as_str()
    );

    async move {
        let start = Instant::now();
        let mut response = next.run(req).await;

        let span = tracing::Span::current();
        span.record("http.status_code", response.status().as_u16());
        record_duration("duration_ms", start.elapsed());
        tracing::info!(status = response.status().as_u16(), "request finished");

        if let Ok(value) = HeaderValue::from_str(&request_id) {
            response.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        response
    }
    .instrument(span)
    .await
}

#[derive(Debug, Clone)]
pub struct CorsPolicy {
    any: bool,
    origins: Vec<String>,
}

impl CorsPolicy {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            any: config.allows_any_origin(),
            origins: config.cors_origins.clone(),
        }
    }

    fn allows(&self, origin: &str) -> bool {
        self.any || self.origins.iter().any(|o| o == origin)
    }
}

/// Allow configured origins with credentials, any method and any header.
/// Preflight requests are answered here with 204.
pub async fn cors(State(policy): State<Arc<CorsPolicy>>, req: Request, next: Next) -> Response {
    let origin = req
        .headers()
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok())
        .filter(|o| policy.allows(o))
        .map(str::to_string);

    let preflight = req.method() == Method::OPTIONS
        && req
            .headers()
            .contains_key(header::ACCESS_CONTROL_REQUEST_METHOD);

    if preflight {
        let requested_headers = req
            .headers()
            .get(header::ACCESS_CONTROL_REQUEST_HEADERS)
            .cloned();
        let mut response = StatusCode::NO_CONTENT.into_response();
        if let Some(origin) = &origin {
            let headers = response.headers_mut();
            apply_origin(headers, origin);
            headers.insert(
                header::ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static("GET, POST, PUT, PATCH, DELETE, OPTIONS"),
            );
            headers.insert(
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                requested_headers.unwrap_or_else(|| HeaderValue::from_static("*")),
            );
            headers.insert(header::ACCESS_CONTROL_MAX_AGE, HeaderValue::from_static("600"));
        }
        return response;
    }

    let mut response = next.run(req).await;
    if let Some(origin) = &origin {
        apply_origin(response.headers_mut(), origin);
    }
    response
}

// Credentials forbid a literal `*`, so the request origin is echoed.
fn apply_origin(headers: &mut HeaderMap, origin: &str) {
    if let Ok(value) = HeaderValue::from_str(origin) {
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        );
        headers.append(header::VARY, HeaderValue::from_static("Origin"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_allows_everything() {
        let policy = CorsPolicy::new(&ServerConfig::default());
        assert!(policy.allows("http://localhost:3000"));
    }

    #[test]
    fn test_explicit_origins() {
        let config =
            ServerConfig::default().with_cors_origins(vec!["https://app.example.com".to_string()]);
        let policy = CorsPolicy::new(&config);
        assert!(policy.allows("https://app.example.com"));
        assert!(!policy.allows("https://evil.example.com"));
    }

    #[test]
    fn test_apply_origin_sets_credentials_and_vary() {
        let mut headers = HeaderMap::new();
        apply_origin(&mut headers, "http://localhost:3000");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "http://localhost:3000");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
        assert_eq!(headers[header::VARY], "Origin");
    }
}
