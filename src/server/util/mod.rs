//! Utility helpers shared by services.

/// Request input normalization
pub mod input;
/// Timestamp formatting
pub mod time;
