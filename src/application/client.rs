/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Client for the Extend API
//!
//! The client signs in on construction and keeps its token fresh in the
//! background, so callers only deal with typed operations.
//!
//! # Example
//! ```ignore
//! use extendz::prelude::*;
//!
//! let client = Client::new(Config::new()).await?;
//! let card = client.get_virtual_card("vc_1234").await?;
//! client.shutdown().await;
//! ```

use crate::application::interfaces::{AccountService, VirtualCardService};
use crate::config::Config;
use crate::error::AppError;
use crate::model::http::{build_http_client, execute};
use crate::model::query::TransactionQuery;
use crate::model::requests::{
    CreateVirtualCardRequest, ForgotPasswordRequest, UpdateVirtualCardRequest,
    VirtualCardPageableRequest,
};
use crate::model::responses::{
    SimpleResponse, TransactionsResponse, VirtualCardResponse, VirtualCardsResponse,
};
use crate::session::auth::Session;
use async_trait::async_trait;
use reqwest::{Client as HttpClient, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, info};

/// Client for the Extend API with automatic authentication
///
/// Call [`Client::shutdown`] before dropping the client to sign out.
pub struct Client {
    config: Arc<Config>,
    http_client: HttpClient,
    session: Session,
}

impl Client {
    /// Creates a new client and performs the initial sign-in
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    ///
    /// # Returns
    /// * `Ok(Client)` - Authenticated client ready to use
    /// * `Err(AppError)` - If the configuration is invalid or sign-in fails
    pub async fn new(config: Config) -> Result<Self, AppError> {
        config.validate()?;
        let config = Arc::new(config);
        let http_client = build_http_client(config.rest_api.timeout())?;
        let session = Session::start(http_client.clone(), &config).await?;

        Ok(Self {
            config,
            http_client,
            session,
        })
    }

    /// Access token currently attached to requests
    #[must_use]
    pub fn current_token(&self) -> Option<String> {
        self.session.current_token()
    }

    /// The underlying session
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The configuration the client was built with
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Signs out and stops token renewal
    ///
    /// Never fails; see [`Session::shutdown`].
    pub async fn shutdown(&self) {
        self.session.shutdown().await;
    }

    fn url(&self, path: &str) -> String {
        self.config.rest_api.url(path)
    }

    /// Sends one authenticated request
    async fn send<B, T>(&self, method: Method, url: &str, body: Option<&B>) -> Result<T, AppError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned + Default,
    {
        if !self.session.is_active() {
            return Err(AppError::SessionClosed);
        }
        let token = self.session.current_token();
        execute(&self.http_client, method, url, token.as_deref(), body).await
    }
}

#[async_trait]
impl VirtualCardService for Client {
    async fn get_user_virtual_cards(
        &self,
        request: &VirtualCardPageableRequest,
    ) -> Result<VirtualCardsResponse, AppError> {
        info!("Getting user virtual cards");
        let response: VirtualCardsResponse = self
            .send(Method::GET, &self.url("virtualcards"), Some(request))
            .await?;
        debug!(
            "Virtual cards obtained: {} cards",
            response.virtual_cards.len()
        );
        Ok(response)
    }

    async fn get_virtual_card(&self, id: &str) -> Result<VirtualCardResponse, AppError> {
        info!("Getting virtual card: {}", id);
        let path = format!("virtualcards/{id}");
        self.send::<(), _>(Method::GET, &self.url(&path), None)
            .await
    }

    async fn get_virtual_card_transactions(
        &self,
        id: &str,
        query: &TransactionQuery,
    ) -> Result<TransactionsResponse, AppError> {
        info!("Getting transactions of virtual card: {}", id);
        let path = format!("virtualcards/{id}/transactions");
        let url = query.apply_to(&self.url(&path))?;
        let response: TransactionsResponse = self.send::<(), _>(Method::GET, &url, None).await?;
        debug!(
            "Transactions obtained: {} transactions",
            response.transactions.len()
        );
        Ok(response)
    }

    async fn create_virtual_card(
        &self,
        request: &CreateVirtualCardRequest,
    ) -> Result<VirtualCardResponse, AppError> {
        info!("Creating virtual card: {}", request.display_name);
        self.send(Method::POST, &self.url("virtualcards"), Some(request))
            .await
    }

    async fn update_virtual_card(
        &self,
        id: &str,
        request: &UpdateVirtualCardRequest,
    ) -> Result<VirtualCardResponse, AppError> {
        info!("Updating virtual card: {}", id);
        let path = format!("virtualcards/{id}");
        self.send(Method::PUT, &self.url(&path), Some(request))
            .await
    }

    async fn cancel_virtual_card(&self, id: &str) -> Result<VirtualCardResponse, AppError> {
        info!("Cancelling virtual card: {}", id);
        let path = format!("virtualcards/{id}/cancel");
        self.send::<(), _>(Method::PUT, &self.url(&path), None)
            .await
    }

    async fn reject_virtual_card(&self, id: &str) -> Result<VirtualCardResponse, AppError> {
        info!("Rejecting virtual card: {}", id);
        let path = format!("virtualcards/{id}/reject");
        self.send::<(), _>(Method::PUT, &self.url(&path), None)
            .await
    }
}

#[async_trait]
impl AccountService for Client {
    async fn forgot_password(&self, email: &str) -> Result<SimpleResponse, AppError> {
        info!("Requesting password reset");
        let request = ForgotPasswordRequest {
            email: email.to_string(),
        };
        self.send(Method::POST, &self.url("forgot"), Some(&request))
            .await
    }
}
