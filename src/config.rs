/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::{
    BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT_MS, DEFAULT_TOKEN_VALIDITY_MS,
    EMAIL_ENV, PASSWORD_ENV, REQUEST_TIMEOUT_ENV, TOKEN_VALIDITY_ENV,
};
use crate::error::AppError;
use crate::utils::config::{env_parse_or, env_var};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Account credentials used to sign in to the Extend API
pub struct Credentials {
    /// Email address of the Extend account
    pub email: String,
    /// Password of the Extend account, never serialized
    #[serde(skip_serializing, default)]
    pub password: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the Extend REST API, without a trailing slash
    pub base_url: String,
    /// Timeout in milliseconds for every REST round trip
    pub timeout_ms: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the authenticated session
pub struct SessionConfig {
    /// Interval in milliseconds between background token renewals
    pub token_validity_ms: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Extend API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Session lifecycle configuration
    pub session: SessionConfig,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl RestApiConfig {
    /// Request timeout as a `Duration`
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Joins an endpoint path onto the base URL
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_validity_ms: DEFAULT_TOKEN_VALIDITY_MS,
        }
    }
}

impl SessionConfig {
    /// Token validity interval as a `Duration`
    #[must_use]
    pub fn token_validity(&self) -> Duration {
        Duration::from_millis(self.token_validity_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// A `.env` file in the working directory is loaded first if present.
    /// Credentials default to empty strings; use [`Config::validate`] before
    /// signing in.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            credentials: Credentials {
                email: env_var(EMAIL_ENV).unwrap_or_default(),
                password: env_var(PASSWORD_ENV).unwrap_or_default(),
            },
            rest_api: RestApiConfig {
                base_url: env_var(BASE_URL_ENV).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                timeout_ms: env_parse_or(REQUEST_TIMEOUT_ENV, DEFAULT_REQUEST_TIMEOUT_MS),
            },
            session: SessionConfig {
                token_validity_ms: env_parse_or(TOKEN_VALIDITY_ENV, DEFAULT_TOKEN_VALIDITY_MS),
            },
        }
    }

    /// Creates a configuration for the given server and account, with default timings
    pub fn with_credentials(
        base_url: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Config {
            credentials: Credentials {
                email: email.into(),
                password: password.into(),
            },
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                ..RestApiConfig::default()
            },
            session: SessionConfig::default(),
        }
    }

    /// Overrides the token validity interval
    #[must_use]
    pub fn with_token_validity(mut self, validity: Duration) -> Self {
        self.session.token_validity_ms = u64::try_from(validity.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Checks that the configuration can be used to sign in
    ///
    /// # Returns
    /// * `Ok(())` - if both credentials are present and the timings are non-zero
    /// * `Err(AppError::Config)` - describing the first problem found
    pub fn validate(&self) -> Result<(), AppError> {
        if self.credentials.email.trim().is_empty() || self.credentials.password.is_empty() {
            return Err(AppError::Config(format!(
                "the '{EMAIL_ENV}' and '{PASSWORD_ENV}' environment variables must be set"
            )));
        }
        if self.rest_api.base_url.trim().is_empty() {
            return Err(AppError::Config("base URL must not be empty".to_string()));
        }
        if self.session.token_validity_ms == 0 {
            return Err(AppError::Config(
                "token validity must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
