//! End-to-end tests driving the full router.
//!
//! Requests go through routing, extraction, CORS and the JSON envelope exactly as a
//! client would see them.

mod envelope;
mod usage;

use axum::http::{Method, StatusCode};
use serde_json::json;
use stockroom_test_utils::prelude::*;

use crate::util::{app, send, send_raw};
