//! Cart persistence between requests.

use crate::cart::Cart;
use crate::error::CommerceError;
use crate::ids::SessionId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Where the storefront keeps session carts.
pub trait SessionStore {
    /// Persist the cart of its session.
    fn save_cart(&mut self, cart: &Cart) -> Result<(), CommerceError>;

    /// Load a previously saved cart.
    fn load_cart(&self, session_id: &SessionId) -> Result<Option<Cart>, CommerceError>;
}

/// Stored session record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    /// The session ID.
    pub id: SessionId,
    /// Cart contents at the time of the write.
    pub cart: Cart,
    /// Incremented on every write.
    pub version: u64,
    /// When the session was last written (Unix timestamp).
    pub last_accessed: u64,
}

/// Session store keeping JSON snapshots in memory.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: HashMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full record of a session, including its version.
    pub fn get_versioned(&self, id: &SessionId) -> Result<Option<SessionData>, CommerceError> {
        self.entries
            .get(&session_key(id))
            .map(|raw| serde_json::from_str(raw).map_err(CommerceError::from))
            .transpose()
    }
}

impl SessionStore for MemorySessionStore {
    fn save_cart(&mut self, cart: &Cart) -> Result<(), CommerceError> {
        let version = self
            .get_versioned(&cart.session_id)?
            .map(|s| s.version + 1)
            .unwrap_or(1);
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        let data = SessionData {
            id: cart.session_id.clone(),
            cart: cart.clone(),
            version,
            last_accessed: now,
        };

        self.entries
            .insert(session_key(&cart.session_id), serde_json::to_string(&data)?);
        tracing::debug!(session_id = %cart.session_id, version, "session cart saved");
        Ok(())
    }

    fn load_cart(&self, session_id: &SessionId) -> Result<Option<Cart>, CommerceError> {
        Ok(self.get_versioned(session_id)?.map(|s| s.cart))
    }
}

fn session_key(id: &SessionId) -> String {
    format!("session:{}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_session() {
        let store = MemorySessionStore::new();
        assert_eq!(store.load_cart(&SessionId::new("nope")).unwrap(), None);
    }

    #[test]
    fn test_save_increments_version() {
        let mut store = MemorySessionStore::new();
        let cart = Cart::new("abc");

        store.save_cart(&cart).unwrap();
        store.save_cart(&cart).unwrap();

        let data = store.get_versioned(&SessionId::new("abc")).unwrap().unwrap();
        assert_eq!(data.version, 2);
        assert_eq!(store.load_cart(&SessionId::new("abc")).unwrap(), Some(cart));
    }
}
