//! Server application core modules.
//!
//! HTTP routing, request handlers, services, data access, configuration and startup
//! for the stock room backend.

#![warn(missing_docs)]

/// Environment configuration
pub mod config;
/// HTTP handlers
pub mod controller;
/// Repositories over the database
pub mod data;
/// Error types and their HTTP responses
pub mod error;
/// Application state and entity aliases
pub mod model;
/// Route and OpenAPI registration
pub mod router;
/// Business logic
pub mod service;
/// Tracing, database and server startup
pub mod startup;
/// Small shared helpers
pub mod util;
