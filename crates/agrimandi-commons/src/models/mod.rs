//! Entity models for every record family in the marketplace.

pub mod dispute;
pub mod listing;
pub mod mandi_rate;
pub mod message;
pub mod notification;
pub mod order;
pub mod review;
pub mod user;
pub mod watchlist;

pub use crate::ids::{
    DisputeId, ListingId, MessageId, NotificationId, OrderId, RateId, ReviewId, UserId, WatchId,
};
pub use dispute::{Dispute, DisputeStatus};
pub use listing::{Listing, ListingStatus};
pub use mandi_rate::MandiRate;
pub use message::{ConversationId, Message, MessageKey};
pub use notification::{Notification, NotificationKey, NotificationKind};
pub use order::{Order, OrderStatus};
pub use review::{Review, ReviewKey};
pub use user::{Role, User};
pub use watchlist::{WatchKind, WatchlistItem, WatchlistKey};
