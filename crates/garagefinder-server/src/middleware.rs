use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use uuid::Uuid;

/// Correlation ID for one API call. Handlers copy it into `meta.request_id`
/// of every success and error body.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Tags each request with an ID so a client-reported failure can be matched
/// to the server's trace logs.
///
/// A non-blank `x-request-id` sent by the frontend is reused; otherwise a
/// fresh UUID is minted. The ID is echoed back in the `x-request-id`
/// response header, including on 4xx and 5xx responses.
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.trim().is_empty())
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    req.extensions_mut().insert(RequestId(id.clone()));

    let mut res = next.run(req).await;

    if let Ok(val) = HeaderValue::from_str(&id) {
        res.headers_mut().insert("x-request-id", val);
    }

    res
}
