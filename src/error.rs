/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Error type shared by every layer of the crate

use thiserror::Error;

/// Main error type for the library
///
/// Renewal failures and sign-out failures during shutdown never surface as an
/// `AppError`; they are logged and swallowed by the session.
#[derive(Debug, Error)]
pub enum AppError {
    /// Transport failure, including request timeouts
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A request body could not be encoded or a response body did not match the expected shape
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The initial sign-in failed, so no session was created
    #[error("sign-in failed: {0}")]
    SignIn(Box<AppError>),

    /// A sign-in or renewal response decoded but carried no access token
    #[error("response carried no access token")]
    MissingToken,

    /// The caller supplied data the client cannot use
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Missing or invalid configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// The session was shut down and can no longer issue requests
    #[error("session closed")]
    SessionClosed,

    /// I/O failure while writing command output
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Wraps an error raised while signing in
    #[must_use]
    pub fn sign_in(source: AppError) -> Self {
        AppError::SignIn(Box::new(source))
    }
}
