//! Request and response types shared by the HTTP API.

pub mod api;
pub mod other_item;
pub mod reference;
pub mod stock;
pub mod usage;
