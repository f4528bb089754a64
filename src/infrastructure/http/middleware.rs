//! HTTP Middleware
//!
//! 请求日志：业务错误（errno）和未进入 handler 的请求拒绝都在这里记录，
//! 附带方法、路径、是否携带会话令牌与耗时。令牌本身不记录。

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use http::header::AUTHORIZATION;

use super::error::{errno, ApiFailure};

/// 请求日志中间件
///
/// - 响应带 [`ApiFailure`]：按 errno 记录，5xx 为 error，其余为 warn
/// - 无 `ApiFailure` 但状态码为 4xx/5xx：请求体解析失败、超出大小限制等
/// - 其余请求只记 debug
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let has_session = request.headers().contains_key(AUTHORIZATION);
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let latency_ms = started.elapsed().as_millis() as u64;

    match response.extensions().get::<ApiFailure>() {
        Some(failure) if failure.errno >= errno::INTERNAL_ERROR => {
            tracing::error!(
                %method,
                %path,
                has_session,
                errno = failure.errno,
                error = %failure.message,
                latency_ms,
                "API request failed"
            );
        }
        Some(failure) => {
            tracing::warn!(
                %method,
                %path,
                has_session,
                errno = failure.errno,
                error = %failure.message,
                latency_ms,
                "API request rejected"
            );
        }
        None if status.is_server_error() || status.is_client_error() => {
            tracing::warn!(
                %method,
                %path,
                has_session,
                status = status.as_u16(),
                latency_ms,
                "Request rejected before reaching handler"
            );
        }
        None => {
            tracing::debug!(%method, %path, has_session, latency_ms, "API request completed");
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http::error::ApiError;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        routing::{get, post},
        Json, Router,
    };
    use tower::util::ServiceExt;

    async fn ok_handler() -> &'static str {
        "OK"
    }

    async fn forbidden_handler() -> Result<&'static str, ApiError> {
        Err(ApiError::Forbidden("only the author may edit".into()))
    }

    async fn unavailable_handler() -> Result<&'static str, ApiError> {
        Err(ApiError::ServiceUnavailable("generation backend down".into()))
    }

    async fn json_handler(Json(body): Json<serde_json::Value>) -> Json<serde_json::Value> {
        Json(body)
    }

    fn create_test_router() -> Router {
        Router::new()
            .route("/ok", get(ok_handler))
            .route("/forbidden", get(forbidden_handler))
            .route("/unavailable", get(unavailable_handler))
            .route("/json", post(json_handler))
            .layer(axum::middleware::from_fn(request_logging_middleware))
    }

    #[tokio::test]
    async fn test_ok_response_passes_through() {
        let app = create_test_router();
        let request = HttpRequest::builder()
            .uri("/ok")
            .header(AUTHORIZATION, "Bearer secret")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.extensions().get::<ApiFailure>().is_none());
    }

    #[tokio::test]
    async fn test_business_error_keeps_errno() {
        let app = create_test_router();
        let request = HttpRequest::builder()
            .uri("/forbidden")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let failure = response.extensions().get::<ApiFailure>().unwrap();
        assert_eq!(failure.errno, errno::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_generation_outage_keeps_errno() {
        let app = create_test_router();
        let request = HttpRequest::builder()
            .uri("/unavailable")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let failure = response.extensions().get::<ApiFailure>().unwrap();
        assert_eq!(failure.errno, errno::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_malformed_body_rejected_before_handler() {
        let app = create_test_router();
        let request = HttpRequest::builder()
            .method("POST")
            .uri("/json")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert!(response.status().is_client_error());
        assert!(response.extensions().get::<ApiFailure>().is_none());
    }
}
