//! Partition names for every entity family.
//!
//! One partition per entity, mapped to a RocksDB column family (or a
//! namespace in the in-memory backend). The server opens the database with
//! exactly this set.

pub const USERS: &str = "users";
pub const LISTINGS: &str = "listings";
pub const ORDERS: &str = "orders";
pub const MANDI_RATES: &str = "mandi_rates";
pub const MESSAGES: &str = "messages";
pub const REVIEWS: &str = "reviews";
pub const WATCHLIST: &str = "watchlist";
pub const NOTIFICATIONS: &str = "notifications";
pub const DISPUTES: &str = "disputes";

/// All partitions, in the order they are created at startup.
pub const ALL: [&str; 9] = [
    USERS,
    LISTINGS,
    ORDERS,
    MANDI_RATES,
    MESSAGES,
    REVIEWS,
    WATCHLIST,
    NOTIFICATIONS,
    DISPUTES,
];
