use std::sync::Arc;

use axum::{
  body::{Body, Bytes},
  http::{Method, Request, StatusCode},
  response::Response,
  Router,
};
use tower::ServiceExt;

use crate::{app::create_app, email::MockEmailProvider, state::SharedAppState};

pub fn app_with_provider(provider: MockEmailProvider) -> Router {
  let state = SharedAppState::new(Arc::new(provider));
  create_app(state)
}

pub async fn send(app: Router, method: Method, uri: &str) -> Response {
  let request = Request::builder()
    .method(method)
    .uri(uri)
    .body(Body::empty())
    .expect("build request");

  app.oneshot(request).await.expect("handle request")
}

pub async fn options(app: Router, uri: &str) -> Response {
  send(app, Method::OPTIONS, uri).await
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Bytes) {
  into_parts(send(app, Method::GET, uri).await).await
}

pub async fn post_raw(app: Router, uri: &str, body: &[u8]) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method(Method::POST)
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(body.to_vec()))
    .expect("build request");

  into_parts(app.oneshot(request).await.expect("handle request")).await
}

async fn into_parts(response: Response) -> (StatusCode, Bytes) {
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}
