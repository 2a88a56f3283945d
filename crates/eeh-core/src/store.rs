//! Token-indexed snapshot store
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::data_model::Snapshot;
use crate::error::EehError;
use crate::token::Token;

/// A snapshot together with the exact bytes served for it.
///
/// The JSON body is encoded once when the entry is created, so every read
/// returns the same bytes and the same digest.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredSnapshot {
    pub snapshot: Snapshot,
    pub body: Vec<u8>,
    /// `blake3:<hex>` over `body`
    pub digest: String,
}

impl StoredSnapshot {
    pub fn encode(snapshot: Snapshot) -> Result<Self, EehError> {
        let body = serde_json::to_vec(&snapshot)?;
        let digest = format!("blake3:{}", blake3::hash(&body));
        Ok(Self {
            snapshot,
            body,
            digest,
        })
    }
}

/// Insert-once mapping from token to snapshot
pub trait SnapshotStore: Send + Sync {
    /// Fails with `TokenCollision` if the token is already present; the
    /// existing entry is left untouched.
    fn put(&self, token: Token, snapshot: Snapshot) -> Result<Arc<StoredSnapshot>, EehError>;

    fn get(&self, token: &str) -> Result<Arc<StoredSnapshot>, EehError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-local store, emptied on restart
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    entries: RwLock<HashMap<Token, Arc<StoredSnapshot>>>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn put(&self, token: Token, snapshot: Snapshot) -> Result<Arc<StoredSnapshot>, EehError> {
        let stored = Arc::new(StoredSnapshot::encode(snapshot)?);

        // Nothing between the check and the insert can panic; poison is ignored.
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if entries.contains_key(&token) {
            return Err(EehError::TokenCollision(token.to_string()));
        }
        entries.insert(token, Arc::clone(&stored));
        Ok(stored)
    }

    fn get(&self, token: &str) -> Result<Arc<StoredSnapshot>, EehError> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(token)
            .cloned()
            .ok_or_else(|| EehError::NotFound(token.to_string()))
    }

    fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}
