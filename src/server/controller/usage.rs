use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        usage::{AddUsageDto, AddUsageRequest, UsageLogsDto},
    },
    server::{
        error::{validation::ValidationError, Error},
        model::app::AppState,
        service::usage::UsageService,
    },
};

/// OpenAPI tag for usage routes
pub static USAGE_TAG: &str = "usage";

/// Get the usage ledger, newest entries first
#[utoipa::path(
    get,
    path = "/api/usage/logs",
    tag = USAGE_TAG,
    responses(
        (status = 200, description = "Every usage entry", body = UsageLogsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_usage_logs(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let usage_service = UsageService::new(&state.db);

    let logs = usage_service.get_logs().await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(UsageLogsDto { logs }))))
}

/// Record that a user took clothing or an other item
#[utoipa::path(
    post,
    path = "/api/usage/add",
    tag = USAGE_TAG,
    request_body = AddUsageRequest,
    responses(
        (status = 200, description = "Usage recorded", body = AddUsageDto),
        (status = 400, description = "Required fields missing for the item type", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_usage(
    State(state): State<AppState>,
    payload: Result<Json<AddUsageRequest>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(request) = payload.map_err(ValidationError::from)?;
    let usage_service = UsageService::new(&state.db);

    let id = usage_service.add_usage(request).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(AddUsageDto {
            id,
            message: "Usage recorded".to_string(),
        })),
    ))
}
