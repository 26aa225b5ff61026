// AgriMandi API Library
//
// This crate provides the REST API layer for the marketplace, including
// HTTP handlers, routes, request/response models, and the typed entity
// repositories the handlers read and write.

pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use state::AppState;
