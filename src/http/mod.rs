//! HTTP adapter for the family registry.
//!
//! Exposes the [`PersonClient`](crate::clients::PersonClient) operations as JSON
//! endpoints. Field names use camelCase on the wire.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::ApiError;
pub use routes::{app, family_router};
