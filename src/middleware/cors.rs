use axum::{
  extract::Request,
  http::{header, HeaderMap, HeaderValue, Method, StatusCode},
  middleware::Next,
  response::{IntoResponse, Response},
};

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";

fn apply_cors_headers(headers: &mut HeaderMap) {
  headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static(ALLOW_ORIGIN));
  headers.insert(header::ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(ALLOW_METHODS));
  headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(ALLOW_HEADERS));
}

/// Empty 200 with the CORS headers, used for every `OPTIONS` request.
pub fn preflight_response() -> Response {
  let mut response = StatusCode::OK.into_response();
  apply_cors_headers(response.headers_mut());
  response
}

/// Answers preflights before routing and stamps CORS headers on everything else.
pub async fn cors_middleware(request: Request, next: Next) -> Response {
  if request.method() == Method::OPTIONS {
    return preflight_response();
  }

  let mut response = next.run(request).await;
  apply_cors_headers(response.headers_mut());
  response
}
