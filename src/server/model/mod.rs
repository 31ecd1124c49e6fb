//! Server application models and type definitions.
//!
//! Application state shared with every handler and type aliases for the SeaORM
//! entity models.

/// Shared handler state
pub mod app;
/// Entity model aliases
pub mod db;
