//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here together with its OpenAPI specification, and
//! Swagger UI is served at `/api/docs`.

use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/styles` - Preset styles
/// - `GET /api/sizes` - Preset sizes
/// - `GET, POST /api/stock/init` - Initial quantities per (style, size) pair
/// - `GET /api/stock/dashboard` - Remaining stock
/// - `GET /api/usage/logs` - Usage ledger
/// - `POST /api/usage/add` - Record usage
/// - `GET, POST /api/other-items` - List and create other items
/// - `PUT, DELETE /api/other-items/{id}` - Update and delete other items
/// - `GET /` - Landing page
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let app_state = AppState { db };
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Stockroom", description = "Stock room inventory API"), tags(
        (name = controller::reference::REFERENCE_TAG, description = "Preset styles and sizes"),
        (name = controller::stock::STOCK_TAG, description = "Initial and remaining stock"),
        (name = controller::usage::USAGE_TAG, description = "Usage ledger"),
        (name = controller::other_item::OTHER_ITEM_TAG, description = "Miscellaneous items"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::reference::get_styles))
        .routes(routes!(controller::reference::get_sizes))
        .routes(routes!(
            controller::stock::get_stock_init,
            controller::stock::set_stock_init
        ))
        .routes(routes!(controller::stock::get_dashboard))
        .routes(routes!(controller::usage::get_usage_logs))
        .routes(routes!(controller::usage::add_usage))
        .routes(routes!(
            controller::other_item::get_other_items,
            controller::other_item::create_other_item
        ))
        .routes(routes!(
            controller::other_item::update_other_item,
            controller::other_item::delete_other_item
        ))
        .split_for_parts();

    routes
        .route("/", get(controller::home::index))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
