use crate::{
    abstract_trait::DynMailerService,
    domain::{requests::SendEmailRequest, response::ApiResponse},
    errors::{ErrorResponse, HttpError},
    middleware::{api_key::api_key_middleware, validate::SimpleValidatedJson},
    state::AppState,
};
use axum::{
    Extension, Json,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/healthchecker",
    responses(
        (status = 200, description = "Service is up", body = ApiResponse)
    ),
    tag = "Email"
)]
pub async fn health_checker_handler() -> Result<impl IntoResponse, HttpError> {
    const MESSAGE: &str = "Mail relay is running";

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(MESSAGE)),
    ))
}

#[utoipa::path(
    post,
    path = "/send-email",
    request_body = SendEmailRequest,
    responses(
        (status = 200, description = "Email relayed to the SMTP provider", body = ApiResponse),
        (status = 401, description = "Invalid or missing API key", body = ErrorResponse),
        (status = 422, description = "Malformed payload or invalid recipient address", body = ErrorResponse),
        (status = 502, description = "SMTP transport failure", body = ErrorResponse)
    ),
    security(
        ("api_key" = [])
    ),
    tag = "Email"
)]
pub async fn send_email_handler(
    Extension(mailer): Extension<DynMailerService>,
    SimpleValidatedJson(body): SimpleValidatedJson<SendEmailRequest>,
) -> Result<impl IntoResponse, HttpError> {
    mailer.send(&body).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(format!(
            "Email sent to {}",
            body.to_email
        ))),
    ))
}

pub fn email_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let public_routes = OpenApiRouter::new().route("/healthchecker", get(health_checker_handler));

    let private_routes = OpenApiRouter::new()
        .route("/send-email", post(send_email_handler))
        .route_layer(middleware::from_fn(api_key_middleware))
        .layer(Extension(app_state.mailer.clone()))
        .layer(Extension(app_state.api_key.clone()));

    public_routes.merge(private_routes)
}
