/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

/// Base URL of the production Extend API
pub const DEFAULT_BASE_URL: &str = "https://api.paywithextend.com";
/// Versioned media type sent in the `Accept` header of every request
///
/// Pins the API revision this client was written against.
pub const ACCEPT_MEDIA_TYPE: &str = "application/vnd.paywithextend.v2021-03-12+json";
/// Media type of every request body
pub const CONTENT_TYPE_JSON: &str = "application/json";
/// User agent string used in HTTP requests to identify this client to the Extend API
pub const USER_AGENT: &str = concat!("extendz/", env!("CARGO_PKG_VERSION"));
/// Timeout in milliseconds applied to every HTTP round trip
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;
/// Interval in milliseconds after which the access token is proactively renewed (10 minutes)
pub const DEFAULT_TOKEN_VALIDITY_MS: u64 = 600_000;
/// Upper bound accepted by the API for the `count` transaction filter
pub const MAX_TRANSACTION_COUNT: u32 = 500;
/// Environment variable holding the account email
pub const EMAIL_ENV: &str = "EXTEND_EMAIL";
/// Environment variable holding the account password
pub const PASSWORD_ENV: &str = "EXTEND_PASSWORD";
/// Environment variable overriding the API base URL
pub const BASE_URL_ENV: &str = "EXTEND_API_BASE_URL";
/// Environment variable overriding the request timeout (milliseconds)
pub const REQUEST_TIMEOUT_ENV: &str = "EXTEND_REQUEST_TIMEOUT_MS";
/// Environment variable overriding the token validity interval (milliseconds)
pub const TOKEN_VALIDITY_ENV: &str = "EXTEND_TOKEN_VALIDITY_MS";
