use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto},
        other_item::{CreateOtherItemRequest, OtherItemsDto, UpdateOtherItemRequest},
    },
    server::{
        error::{validation::ValidationError, Error},
        model::app::AppState,
        service::other_item::OtherItemService,
    },
};

/// OpenAPI tag for other-item routes
pub static OTHER_ITEM_TAG: &str = "other-item";

/// List other items alphabetically
#[utoipa::path(
    get,
    path = "/api/other-items",
    tag = OTHER_ITEM_TAG,
    responses(
        (status = 200, description = "All other items", body = OtherItemsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_other_items(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let item_service = OtherItemService::new(&state.db);

    let items = item_service.get_all().await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(OtherItemsDto { items }))))
}

/// Create an other item
#[utoipa::path(
    post,
    path = "/api/other-items",
    tag = OTHER_ITEM_TAG,
    request_body = CreateOtherItemRequest,
    responses(
        (status = 200, description = "Item created", body = MessageDto),
        (status = 400, description = "Name missing", body = ErrorDto),
        (status = 500, description = "Internal server error, including duplicate names", body = ErrorDto)
    ),
)]
pub async fn create_other_item(
    State(state): State<AppState>,
    payload: Result<Json<CreateOtherItemRequest>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(request) = payload.map_err(ValidationError::from)?;
    let item_service = OtherItemService::new(&state.db);

    item_service.create(request).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(MessageDto::new("Item created"))),
    ))
}

/// Replace the initial quantity of an other item
#[utoipa::path(
    put,
    path = "/api/other-items/{id}",
    tag = OTHER_ITEM_TAG,
    params(
        ("id" = i32, Path, description = "Other item ID")
    ),
    request_body = UpdateOtherItemRequest,
    responses(
        (status = 200, description = "Quantity updated, also returned for unknown IDs", body = MessageDto),
        (status = 400, description = "Quantity missing or invalid ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_other_item(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateOtherItemRequest>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = path.map_err(ValidationError::from)?;
    let Json(request) = payload.map_err(ValidationError::from)?;
    let item_service = OtherItemService::new(&state.db);

    item_service.update_quantity(id, request).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(MessageDto::new("Item updated"))),
    ))
}

/// Delete an other item, keeping its usage entries in the ledger
#[utoipa::path(
    delete,
    path = "/api/other-items/{id}",
    tag = OTHER_ITEM_TAG,
    params(
        ("id" = i32, Path, description = "Other item ID")
    ),
    responses(
        (status = 200, description = "Item deleted, also returned for unknown IDs", body = MessageDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_other_item(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = path.map_err(ValidationError::from)?;
    let item_service = OtherItemService::new(&state.db);

    item_service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(MessageDto::new("Item deleted"))),
    ))
}
