//! Transaction identifiers and id generation
//!
//! Ids are opaque strings. Freshly created transactions get a UUIDv4, but
//! rows loaded from disk may carry any non-empty text, so the id is not
//! parsed or validated beyond that.

use std::cell::Cell;
use std::fmt;

use uuid::Uuid;

/// Opaque unique identifier of a transaction
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransactionId(String);

impl TransactionId {
    /// Wrap an existing identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TransactionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TransactionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Capability to mint new unique transaction ids
pub trait IdGenerator {
    /// Generate a new unique id
    fn generate(&self) -> TransactionId;
}

/// Default generator producing random UUIDv4 strings
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> TransactionId {
        TransactionId(Uuid::new_v4().to_string())
    }
}

/// Deterministic generator yielding `<prefix>1`, `<prefix>2`, ...
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: Cell<u64>,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: Cell::new(1),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn generate(&self) -> TransactionId {
        let n = self.next.get();
        self.next.set(n + 1);
        TransactionId(format!("{}{}", self.prefix, n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_ids_are_unique() {
        let ids = UuidGenerator;
        let a = ids.generate();
        let b = ids.generate();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn test_sequential_ids() {
        let ids = SequentialIds::new("tx-");
        assert_eq!(ids.generate().as_str(), "tx-1");
        assert_eq!(ids.generate().as_str(), "tx-2");
    }

    #[test]
    fn test_id_display() {
        let id = TransactionId::from("abc-123");
        assert_eq!(id.to_string(), "abc-123");
    }
}
