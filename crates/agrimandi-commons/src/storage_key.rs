//! Storage key trait for explicit key serialization.
//!
//! Every record key in the marketplace is a plain UTF-8 string (an id, or a
//! colon-joined composite like `{conversationId}:{messageId}`), so the
//! encoding is the string's bytes. The trait exists to make the storage
//! serialization an explicit contract rather than relying on `AsRef<[u8]>`,
//! which silently truncates composite keys to their first component.
//!
//! Colon-joined UTF-8 keys sort byte-wise in the same order as the original
//! string keys, which is what prefix scans rely on.

/// Explicit contract for serializing a key into storage bytes.
pub trait StorageKey {
    /// Returns the full key bytes as stored in the backend.
    fn storage_key(&self) -> Vec<u8>;
}

impl StorageKey for String {
    fn storage_key(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

impl StorageKey for &str {
    fn storage_key(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}
