/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Authenticated session for the Extend API
//!
//! This module owns the whole token lifecycle:
//! - Initial sign-in with email and password
//! - A background task that renews the access token every validity interval
//! - Shutdown that signs out and stops the background task
//!
//! # Example
//! ```ignore
//! use extendz::config::Config;
//! use extendz::model::http::build_http_client;
//! use extendz::session::auth::Session;
//!
//! let config = Config::new();
//! let http = build_http_client(config.rest_api.timeout())?;
//! let session = Session::start(http, &config).await?;
//! let token = session.current_token();
//! session.shutdown().await;
//! ```

use crate::config::{Config, RestApiConfig};
use crate::error::AppError;
use crate::model::http::execute;
use crate::model::requests::{LoginRequest, LogoutRequest, RefreshTokenLoginRequest};
use crate::model::responses::LoginSignUpResponse;
use crate::session::state::{SessionState, StateCell};
use crate::session::token::TokenStore;
use reqwest::{Client, Method};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Signed-in session with automatic token renewal
///
/// Created by [`Session::start`], which only returns once the initial sign-in
/// succeeded. A background task then renews the access token every
/// `token_validity` interval until [`Session::shutdown`] is called.
pub struct Session {
    http: Client,
    rest_api: RestApiConfig,
    tokens: TokenStore,
    state: Arc<StateCell>,
    cancel: CancellationToken,
    renewal: Mutex<Option<JoinHandle<()>>>,
    validity: Duration,
}

impl Session {
    /// Signs in and starts the renewal task
    ///
    /// # Arguments
    /// * `http` - HTTP client used for every session call, already configured with its timeout
    /// * `config` - Credentials, base URL and token validity interval
    ///
    /// # Returns
    /// * `Ok(Session)` - Active session whose token is already published
    /// * `Err(AppError::Config)` - If the configuration is unusable, e.g. a zero validity interval
    /// * `Err(AppError::SignIn)` - If sign-in failed; no task is started
    pub async fn start(http: Client, config: &Config) -> Result<Self, AppError> {
        // A zero interval would renew back to back
        config.validate()?;
        let state = Arc::new(StateCell::new());
        let tokens = TokenStore::new();
        let validity = config.session.token_validity();

        info!("Signing in as {}", config.credentials.email);
        let login = LoginRequest {
            email: config.credentials.email.clone(),
            password: config.credentials.password.clone(),
        };
        let response = sign_in(&http, &config.rest_api, &login)
            .await
            .map_err(AppError::sign_in)?;

        tokens.publish(response.token);
        state.store(SessionState::Active);

        let cancel = CancellationToken::new();
        let task = RenewalTask {
            http: http.clone(),
            url: config.rest_api.url("renewauth"),
            tokens: tokens.clone(),
            cancel: cancel.clone(),
            validity,
            refresh_token: response.refresh_token,
        };
        let handle = tokio::spawn(task.run());

        info!(
            "✓ Signed in, renewing token every {}s",
            validity.as_secs_f64()
        );
        Ok(Self {
            http,
            rest_api: config.rest_api.clone(),
            tokens,
            state,
            cancel,
            renewal: Mutex::new(Some(handle)),
            validity,
        })
    }

    /// Most recently published access token
    ///
    /// `None` once the session has been shut down.
    #[must_use]
    pub fn current_token(&self) -> Option<String> {
        self.tokens.current()
    }

    /// Receiver notified every time the access token changes
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.tokens.subscribe()
    }

    /// Current lifecycle state
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state.load()
    }

    /// Whether requests can still be issued with this session
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state() == SessionState::Active
    }

    /// Interval between token renewals
    #[must_use]
    pub fn validity(&self) -> Duration {
        self.validity
    }

    /// Signs out and stops the renewal task
    ///
    /// Only the first call does any work; later calls return immediately.
    /// A failed sign-out is logged and otherwise ignored, the renewal task is
    /// stopped regardless.
    pub async fn shutdown(&self) {
        if !self
            .state
            .transition(SessionState::Active, SessionState::Closing)
        {
            debug!("Shutdown already requested, session is {}", self.state());
            return;
        }

        info!("Signing out");
        if let Err(e) = self.sign_out().await {
            warn!("Sign-out failed, closing session anyway: {}", e);
        }

        self.cancel.cancel();
        let handle = self.renewal.lock().await.take();
        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                warn!("Renewal task ended abnormally: {}", e);
            }
        }

        self.tokens.clear();
        self.state.store(SessionState::Closed);
        info!("✓ Session closed");
    }

    async fn sign_out(&self) -> Result<(), AppError> {
        let token = self.tokens.current();
        execute::<_, Value>(
            &self.http,
            Method::DELETE,
            &self.rest_api.url("signout"),
            token.as_deref(),
            Some(&LogoutRequest::default()),
        )
        .await?;
        Ok(())
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        // Stops the renewal task if shutdown was never called; no sign-out happens here
        self.cancel.cancel();
    }
}

/// `POST /signin`, unauthenticated
async fn sign_in(
    http: &Client,
    rest_api: &RestApiConfig,
    login: &LoginRequest,
) -> Result<LoginSignUpResponse, AppError> {
    let response: LoginSignUpResponse = execute(
        http,
        Method::POST,
        &rest_api.url("signin"),
        None,
        Some(login),
    )
    .await?;
    if response.token.is_empty() {
        return Err(AppError::MissingToken);
    }
    Ok(response)
}

/// `POST /renewauth`, unauthenticated
async fn renew_auth(
    http: &Client,
    url: &str,
    refresh_token: &str,
) -> Result<LoginSignUpResponse, AppError> {
    let request = RefreshTokenLoginRequest {
        refresh_token: refresh_token.to_string(),
    };
    let response: LoginSignUpResponse =
        execute(http, Method::POST, url, None, Some(&request)).await?;
    if response.token.is_empty() {
        return Err(AppError::MissingToken);
    }
    Ok(response)
}

/// State owned by the background renewal task
///
/// The refresh token lives here and nowhere else.
struct RenewalTask {
    http: Client,
    url: String,
    tokens: TokenStore,
    cancel: CancellationToken,
    validity: Duration,
    refresh_token: String,
}

impl RenewalTask {
    async fn run(mut self) {
        let mut consecutive_failures: u32 = 0;

        loop {
            tokio::select! {
                biased;
                _ = self.cancel.cancelled() => break,
                _ = tokio::time::sleep(self.validity) => {}
            }

            let outcome = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => break,
                outcome = renew_auth(&self.http, &self.url, &self.refresh_token) => outcome,
            };

            match outcome {
                Ok(response) => {
                    consecutive_failures = 0;
                    self.tokens.publish(response.token);
                    if !response.refresh_token.is_empty() {
                        self.refresh_token = response.refresh_token;
                    }
                    info!("✓ Access token renewed");
                }
                Err(e) => {
                    // Keep serving the previous token and retry on the next interval
                    consecutive_failures += 1;
                    warn!(
                        "Token renewal failed ({} in a row), keeping current token: {}",
                        consecutive_failures, e
                    );
                }
            }
        }

        debug!("Renewal task stopped");
    }
}
