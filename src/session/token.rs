/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use std::sync::Arc;
use tokio::sync::watch;

/// Single-slot store for the current access token
///
/// Writers replace the whole value in one step and readers always get a
/// complete copy of either the previous or the new token. `None` is the
/// unauthenticated state: requests made with it carry no `Authorization`
/// header.
///
/// Cloning is cheap and every clone shares the same slot.
#[derive(Debug, Clone)]
pub struct TokenStore {
    slot: Arc<watch::Sender<Option<String>>>,
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore {
    /// Creates an empty, unauthenticated store
    #[must_use]
    pub fn new() -> Self {
        let (slot, _) = watch::channel(None);
        Self {
            slot: Arc::new(slot),
        }
    }

    /// Most recently published token, or `None` when unauthenticated
    #[must_use]
    pub fn current(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    /// Whether a token has been published and not cleared since
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Publishes a new token, returning the one it replaces
    pub fn publish(&self, token: impl Into<String>) -> Option<String> {
        self.slot.send_replace(Some(token.into()))
    }

    /// Drops the current token, returning the store to the unauthenticated state
    pub fn clear(&self) -> Option<String> {
        self.slot.send_replace(None)
    }

    /// Receiver notified on every publication
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.slot.subscribe()
    }
}
