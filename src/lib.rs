//! Stock room inventory backend.
//!
//! Records initial stock per (style, size) pair and per miscellaneous item, keeps an
//! append-only ledger of usage, and reports remaining stock over an HTTP JSON API.

pub mod model;
pub mod server;
