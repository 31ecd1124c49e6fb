use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        reference::{SizesDto, StylesDto},
    },
    server::{error::Error, model::app::AppState, service::reference::ReferenceService},
};

/// OpenAPI tag for style and size routes
pub static REFERENCE_TAG: &str = "reference";

/// Get all clothing styles ordered by sort order
#[utoipa::path(
    get,
    path = "/api/styles",
    tag = REFERENCE_TAG,
    responses(
        (status = 200, description = "Styles in display order", body = StylesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_styles(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let reference_service = ReferenceService::new(&state.db);

    let styles = reference_service.get_styles().await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(StylesDto { styles }))))
}

/// Get all clothing sizes ordered by sort order
#[utoipa::path(
    get,
    path = "/api/sizes",
    tag = REFERENCE_TAG,
    responses(
        (status = 200, description = "Sizes in display order", body = SizesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sizes(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let reference_service = ReferenceService::new(&state.db);

    let sizes = reference_service.get_sizes().await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(SizesDto { sizes }))))
}
