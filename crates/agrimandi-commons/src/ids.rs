//! Typed identifier newtypes and id generation.
//!
//! Ids are time-based strings (`{unix_millis}-{suffix}`) so that records
//! created later sort after earlier ones under a byte-wise key scan. The
//! suffix is a process-wide counter, which keeps ids unique even when two
//! records are created within the same millisecond.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

static ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generates a fresh time-based identifier.
pub fn generate_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let seq = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{}-{:06x}", millis, seq & 0xff_ffff)
}

/// Declares a typed string identifier wrapper.
///
/// Each id type serializes transparently as its inner string, so wire
/// payloads are unaffected by the newtype.
macro_rules! define_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new id from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generates a fresh time-based id.
            pub fn generate() -> Self {
                Self($crate::ids::generate_id())
            }

            /// Returns the id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl $crate::storage_key::StorageKey for $name {
            fn storage_key(&self) -> Vec<u8> {
                self.0.as_bytes().to_vec()
            }
        }
    };
}

define_id!(
    /// Identifier of a user, as issued by the identity provider.
    UserId
);
define_id!(
    /// Identifier of a produce listing.
    ListingId
);
define_id!(
    /// Identifier of an order/inquiry.
    OrderId
);
define_id!(
    /// Identifier of a government mandi rate record.
    RateId
);
define_id!(
    /// Identifier of a single chat message.
    MessageId
);
define_id!(
    /// Identifier of a review.
    ReviewId
);
define_id!(
    /// Identifier of a watchlist item.
    WatchId
);
define_id!(
    /// Identifier of a notification.
    NotificationId
);
define_id!(
    /// Identifier of a dispute.
    DisputeId
);
