/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # Extendz Prelude
//!
//! Re-exports the types needed for most interactions with the Extend API.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use extendz::prelude::*;
//!
//! # async fn demo() -> Result<(), AppError> {
//! let client = Client::new(Config::new()).await?;
//! let cards = client
//!     .get_user_virtual_cards(&VirtualCardPageableRequest::new())
//!     .await?;
//! client.shutdown().await;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Extend API client
pub use crate::config::{Config, Credentials, RestApiConfig, SessionConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// SESSION MANAGEMENT
// ============================================================================

/// Signed-in session with background token renewal
pub use crate::session::auth::Session;

/// Session lifecycle
pub use crate::session::state::SessionState;

/// Shared access token slot
pub use crate::session::token::TokenStore;

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// Client implementing every API operation
pub use crate::application::client::Client;

/// Service traits
pub use crate::application::interfaces::{AccountService, VirtualCardService};

// ============================================================================
// MODELS
// ============================================================================

/// Request executor
pub use crate::model::http::{build_http_client, execute};

/// Transaction filters
pub use crate::model::query::TransactionQuery;

/// Request models
pub use crate::model::requests::*;

/// Response models
pub use crate::model::responses::*;

/// Domain records
pub use crate::presentation::*;

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging setup
pub use crate::utils::logger::setup_logger;
