//! HTTP request handlers, one module per entity family.
//!
//! Handlers authenticate first where required, run their authorization
//! checks against stored records, and map every failure onto the
//! `ApiError` taxonomy.

pub mod admin;
pub mod disputes;
pub mod health;
pub mod listings;
pub mod mandi_rates;
pub mod messages;
pub mod notifications;
pub mod orders;
pub mod reviews;
pub mod users;
pub mod watchlist;
