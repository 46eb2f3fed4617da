/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # Extendz
//!
//! Client library for the [Extend](https://www.paywithextend.com) virtual card API.
//!
//! ## Features
//!
//! - Email and password sign-in with automatic token renewal in the background
//! - Typed operations for virtual cards, their transactions and password resets
//! - A command line tool (`extendz`) that prints every response as JSON
//!
//! ## Configuration
//!
//! | Variable | Description | Default |
//! |---|---|---|
//! | `EXTEND_EMAIL` | Account email | required |
//! | `EXTEND_PASSWORD` | Account password | required |
//! | `EXTEND_API_BASE_URL` | API base URL | `https://api.paywithextend.com` |
//! | `EXTEND_REQUEST_TIMEOUT_MS` | Timeout of every request | `10000` |
//! | `EXTEND_TOKEN_VALIDITY_MS` | Interval between token renewals | `600000` |
//! | `LOGLEVEL` | Log level | `INFO` |
//!
//! ## Example
//!
//! ```rust,no_run
//! use extendz::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let client = Client::new(Config::new()).await?;
//!
//!     let query = TransactionQuery::new().with_count(25).with_status("CLEARED");
//!     let transactions = client
//!         .get_virtual_card_transactions("vc_1234", &query)
//!         .await?;
//!     println!("{transactions}");
//!
//!     client.shutdown().await;
//!     Ok(())
//! }
//! ```

/// Client and service traits
pub mod application;
/// Command line interface
pub mod cli;
/// Configuration for the client
pub mod config;
/// Constants used across the library
pub mod constants;
/// Error types
pub mod error;
/// Request executor, request and response models
pub mod model;
/// Convenient re-exports
pub mod prelude;
/// Domain records returned by the API
pub mod presentation;
/// Authenticated session and token renewal
pub mod session;
/// Utility functions
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
