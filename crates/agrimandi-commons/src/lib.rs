// AgriMandi Commons
//
// Shared types for the marketplace backend: typed identifiers, entity
// models, storage key encoding, and id generation. Kept free of HTTP and
// storage-engine dependencies so every other crate can depend on it.

pub mod ids;
pub mod models;
pub mod partitions;
pub mod storage_key;

pub use ids::{
    generate_id, DisputeId, ListingId, MessageId, NotificationId, OrderId, RateId, ReviewId,
    UserId, WatchId,
};
pub use models::{
    ConversationId, Dispute, DisputeStatus, Listing, ListingStatus, MandiRate, Message,
    MessageKey, Notification, NotificationKey, NotificationKind, Order, OrderStatus, Review,
    ReviewKey, Role, User, WatchKind, WatchlistItem, WatchlistKey,
};
pub use storage_key::StorageKey;
