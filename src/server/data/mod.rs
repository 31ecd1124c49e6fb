//! Data access layer repositories.
//!
//! Repositories wrap any `ConnectionTrait`, so the same code runs against the shared
//! connection or inside a transaction.

/// Other-item repository
pub mod other_item;
/// Style and size repositories
pub mod reference;
/// Initial stock repository
pub mod stock;
/// Usage ledger repository
pub mod usage;
