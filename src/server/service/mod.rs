//! Service layer for business logic.
//!
//! Services validate requests, apply defaults and coordinate the repositories. Each
//! service borrows the shared database connection for the duration of a request.

/// Remaining stock computation
pub mod dashboard;
/// Other-item management
pub mod other_item;
/// Preset styles and sizes
pub mod reference;
/// Initial stock per (style, size) pair
pub mod stock;
/// Usage ledger recording and listing
pub mod usage;
