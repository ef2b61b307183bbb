//! Middleware for logging requests and responses.

use axum::{
    body::Body,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// The number of bytes of a request or response body to log at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// The largest request body, in bytes, that the middleware will read.
pub const MAX_REQUEST_BODY_SIZE: usize = 2 * 1024 * 1024;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If a body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is
/// truncated and the full body is logged at the `debug` level.
///
/// Responds with `400 Bad Request` if the request body cannot be read or is
/// larger than [MAX_REQUEST_BODY_SIZE] bytes.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let body_text = match body_to_text(body, MAX_REQUEST_BODY_SIZE).await {
        Ok(text) => text,
        Err(error) => {
            tracing::warn!("Could not read request body: {error}");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    tracing::info!(
        method = %parts.method,
        uri = %parts.uri,
        body = %truncate(&body_text),
        "Received request"
    );
    log_full_body("request", &body_text);

    let request = Request::from_parts(parts, body_text.into());
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    // Responses are built by this app, so their size is not capped.
    let body_text = match body_to_text(body, usize::MAX).await {
        Ok(text) => text,
        Err(error) => {
            tracing::error!("Could not read response body: {error}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    tracing::info!(
        status = %parts.status,
        body = %truncate(&body_text),
        "Sending response"
    );
    log_full_body("response", &body_text);

    Response::from_parts(parts, body_text.into())
}

async fn body_to_text(body: Body, limit: usize) -> Result<String, axum::Error> {
    let bytes = axum::body::to_bytes(body, limit).await?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn log_full_body(kind: &str, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::debug!("Full {kind} body: {body:?}");
    }
}

/// The first [LOG_BODY_LENGTH_LIMIT] bytes of `text`, cut back to the nearest
/// character boundary, with "..." appended if anything was cut.
fn truncate(text: &str) -> String {
    if text.len() <= LOG_BODY_LENGTH_LIMIT {
        return text.to_owned();
    }

    let mut end = LOG_BODY_LENGTH_LIMIT;
    while !text.is_char_boundary(end) {
        end -= 1;
    }

    format!("{}...", &text[..end])
}

#[cfg(test)]
mod logging_middleware_tests {
    use axum::{Router, middleware, routing::post};
    use axum_test::TestServer;

    use super::{LOG_BODY_LENGTH_LIMIT, MAX_REQUEST_BODY_SIZE, logging_middleware, truncate};

    fn echo_server() -> TestServer {
        let app = Router::new()
            .route("/echo", post(|body: String| async move { body }))
            .layer(middleware::from_fn(logging_middleware));

        TestServer::try_new(app).expect("Could not create test server.")
    }

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(truncate("name=Notebook"), "name=Notebook");
    }

    #[test]
    fn long_text_is_cut_at_limit() {
        let text = "a".repeat(LOG_BODY_LENGTH_LIMIT + 10);

        let got = truncate(&text);

        assert_eq!(got, format!("{}...", "a".repeat(LOG_BODY_LENGTH_LIMIT)));
    }

    #[test]
    fn long_text_is_cut_at_char_boundary() {
        // Each 'é' takes two bytes, so the limit falls inside a character.
        let text = format!("a{}", "é".repeat(LOG_BODY_LENGTH_LIMIT));

        let got = truncate(&text);

        assert!(got.ends_with("..."));
        assert_eq!(got.len(), LOG_BODY_LENGTH_LIMIT - 1 + "...".len());
    }

    #[tokio::test]
    async fn passes_request_body_through() {
        let server = echo_server();
        let body = "name=Notebook&description=".repeat(10);

        let response = server.post("/echo").text(body.clone()).await;

        response.assert_status_ok();
        response.assert_text(body);
    }

    #[tokio::test]
    async fn accepts_body_at_size_limit() {
        let server = echo_server();
        let body = "a".repeat(MAX_REQUEST_BODY_SIZE);

        let response = server.post("/echo").text(body.clone()).await;

        response.assert_status_ok();
        response.assert_text(body);
    }

    #[tokio::test]
    async fn rejects_body_over_size_limit() {
        let server = echo_server();
        let body = "a".repeat(MAX_REQUEST_BODY_SIZE + 1);

        let response = server.post("/echo").text(body).expect_failure().await;

        response.assert_status_bad_request();
    }
}
