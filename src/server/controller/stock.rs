use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto},
        stock::{DashboardDto, StockInitMatrixDto, StockInitRequest},
    },
    server::{
        error::{validation::ValidationError, Error},
        model::app::AppState,
        service::{dashboard::DashboardService, stock::StockService},
    },
};

/// OpenAPI tag for stock routes
pub static STOCK_TAG: &str = "stock";

/// Get initial quantities for every tracked (style, size) pair
#[utoipa::path(
    get,
    path = "/api/stock/init",
    tag = STOCK_TAG,
    responses(
        (status = 200, description = "Initial quantities keyed by style then size", body = StockInitMatrixDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stock_init(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let stock_service = StockService::new(&state.db);

    let matrix = stock_service.get_init_matrix().await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(matrix))))
}

/// Set the initial quantity of a (style, size) pair, replacing any previous value
#[utoipa::path(
    post,
    path = "/api/stock/init",
    tag = STOCK_TAG,
    request_body = StockInitRequest,
    responses(
        (status = 200, description = "Initial quantity saved", body = MessageDto),
        (status = 400, description = "Style, size or quantity missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_stock_init(
    State(state): State<AppState>,
    payload: Result<Json<StockInitRequest>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(request) = payload.map_err(ValidationError::from)?;
    let stock_service = StockService::new(&state.db);

    stock_service.set_init(request).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(MessageDto::new("Initial stock saved"))),
    ))
}

/// Get remaining stock for clothing and other items
#[utoipa::path(
    get,
    path = "/api/stock/dashboard",
    tag = STOCK_TAG,
    responses(
        (status = 200, description = "Initial, used and remaining quantities", body = DashboardDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let dashboard_service = DashboardService::new(&state.db);

    let dashboard = dashboard_service.get_dashboard().await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(dashboard))))
}
