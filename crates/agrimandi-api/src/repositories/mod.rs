//! Typed repositories, one per entity family.
//!
//! Each repository is an `EntityStore<K, V>` over its partition plus the
//! handful of domain queries its handlers need. All list endpoints filter
//! in memory over full prefix scans; record volumes are assumed small.

pub mod disputes;
pub mod listings;
pub mod mandi_rates;
pub mod messages;
pub mod notifications;
pub mod orders;
pub mod reviews;
pub mod users;
pub mod watchlist;

pub use disputes::DisputeStore;
pub use listings::ListingStore;
pub use mandi_rates::MandiRateStore;
pub use messages::MessageStore;
pub use notifications::NotificationStore;
pub use orders::OrderStore;
pub use reviews::ReviewStore;
pub use users::UserStore;
pub use watchlist::WatchlistStore;
