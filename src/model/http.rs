/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Request executor: one JSON round trip against the Extend API

use crate::constants::{ACCEPT_MEDIA_TYPE, CONTENT_TYPE_JSON, USER_AGENT};
use crate::error::AppError;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Builds the HTTP client shared by the session and every operation
///
/// # Arguments
/// * `timeout` - Upper bound for a complete round trip; exceeding it yields `AppError::Network`
pub fn build_http_client(timeout: Duration) -> Result<Client, AppError> {
    Ok(Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()?)
}

/// Performs one HTTP round trip and decodes the JSON response
///
/// The request always carries the JSON `Content-Type` and the versioned
/// `Accept` header. An `Authorization: Bearer` header is added only when
/// `token` holds a non-empty value, so sign-in and renewal can pass `None`.
/// The body is omitted entirely when `body` is `None`.
///
/// The HTTP status is not inspected: a non-2xx answer with a JSON body is
/// decoded into `T` like any other. An empty body decodes to `T::default()`.
///
/// # Arguments
/// * `client` - HTTP client, already configured with the request timeout
/// * `method` - HTTP method
/// * `url` - Full URL, including any query string
/// * `token` - Access token, `None` for unauthenticated calls
/// * `body` - Optional request body, serialized as JSON
///
/// # Returns
/// * `Ok(T)` - Decoded response
/// * `Err(AppError::Network)` - Transport failure or timeout
/// * `Err(AppError::Json)` - Body could not be encoded, or the response did not match `T`
pub async fn execute<B, T>(
    client: &Client,
    method: Method,
    url: &str,
    token: Option<&str>,
    body: Option<&B>,
) -> Result<T, AppError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned + Default,
{
    debug!("{} {}", method, url);

    let mut request = client
        .request(method, url)
        .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
        .header(ACCEPT, ACCEPT_MEDIA_TYPE);

    if let Some(token) = token.filter(|t| !t.is_empty()) {
        request = request.header(AUTHORIZATION, format!("Bearer {token}"));
    }

    if let Some(body) = body {
        request = request.body(serde_json::to_vec(body)?);
    }

    let response = request.send().await?;
    let status = response.status();
    let bytes = response.bytes().await?;
    debug!("Response status: {} ({} bytes)", status, bytes.len());

    if bytes.is_empty() {
        return Ok(T::default());
    }
    Ok(serde_json::from_slice(&bytes)?)
}
