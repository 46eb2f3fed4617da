/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};

/// Lifecycle of a [`Session`](crate::session::auth::Session)
///
/// `Initializing → Active → Closing → Closed`. A session only becomes
/// `Active` after its initial sign-in succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum SessionState {
    /// Signing in
    Initializing = 0,
    /// Signed in, renewal task running
    Active = 1,
    /// Shutdown requested, signing out
    Closing = 2,
    /// Signed out and renewal task stopped
    Closed = 3,
}

impl SessionState {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => SessionState::Initializing,
            1 => SessionState::Active,
            2 => SessionState::Closing,
            _ => SessionState::Closed,
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Initializing => "initializing",
            SessionState::Active => "active",
            SessionState::Closing => "closing",
            SessionState::Closed => "closed",
        };
        f.write_str(name)
    }
}

/// Atomic cell holding a [`SessionState`]
#[derive(Debug)]
pub struct StateCell(AtomicU8);

impl Default for StateCell {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCell {
    /// Creates a cell in the `Initializing` state
    #[must_use]
    pub fn new() -> Self {
        Self(AtomicU8::new(SessionState::Initializing as u8))
    }

    /// Current state
    #[must_use]
    pub fn load(&self) -> SessionState {
        SessionState::from_u8(self.0.load(Ordering::Acquire))
    }

    /// Unconditionally moves to `state`
    pub fn store(&self, state: SessionState) {
        self.0.store(state as u8, Ordering::Release);
    }

    /// Moves from `from` to `to`; returns `false` without changing anything if the
    /// current state is not `from`
    pub fn transition(&self, from: SessionState, to: SessionState) -> bool {
        self.0
            .compare_exchange(from as u8, to as u8, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}
