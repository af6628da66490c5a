use crate::errors::ErrorResponse;
use axum::{
    Extension, Json,
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::IntoResponse,
};
use std::sync::Arc;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Gate requests on the shared `x-api-key` secret.
///
/// A missing or mismatching key is rejected before the handler runs, so the
/// SMTP transport is never touched for unauthorized callers.
pub async fn api_key_middleware(
    Extension(api_key): Extension<Arc<String>>,
    req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let provided = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    match provided {
        Some(key) if key == api_key.as_str() => Ok(next.run(req).await),
        _ => Err((
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                status: "fail".to_string(),
                message: "Invalid API key".to_string(),
            }),
        )),
    }
}
