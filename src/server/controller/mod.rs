//! HTTP controller endpoints for the stock room API.
//!
//! Axum handlers that extract the request, call into the services and wrap the result
//! in the `{success, ...}` envelope. Each endpoint is annotated for the OpenAPI document.

/// Landing page
pub mod home;
/// Other-item CRUD endpoints
pub mod other_item;
/// Style and size endpoints
pub mod reference;
/// Stock initialization and dashboard endpoints
pub mod stock;
/// Usage ledger endpoints
pub mod usage;
