/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Command line interface
//!
//! Each subcommand maps to one client operation. Request bodies are passed as
//! raw JSON strings and parsed before the client signs in.

use crate::application::client::Client;
use crate::application::interfaces::{AccountService, VirtualCardService};
use crate::config::Config;
use crate::error::AppError;
use crate::model::query::TransactionQuery;
use crate::model::requests::{
    CreateVirtualCardRequest, UpdateVirtualCardRequest, VirtualCardPageableRequest,
};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// A tool for interacting with the Extend API
#[derive(Parser, Debug)]
#[command(name = "extendz", author, version, about, long_about = None)]
pub struct Cli {
    /// Overrides the API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Get the virtual cards for a user
    GetUserVirtualCards {
        /// The VirtualCardPageableRequest JSON
        #[arg(short, long)]
        request: Option<String>,
    },
    /// Get a virtual card
    GetVirtualCard {
        /// The virtual card ID
        #[arg(short, long)]
        id: String,
    },
    /// Get the transactions for a virtual card
    GetVirtualCardTransactions {
        /// The virtual card ID
        #[arg(short, long)]
        id: String,
        /// The number of transactions to get; values outside 1..=500 are ignored
        #[arg(short, long, allow_negative_numbers = true)]
        count: Option<i64>,
        /// Get transactions before timestamp
        #[arg(short, long)]
        before: Option<String>,
        /// Get transactions after timestamp
        #[arg(short, long)]
        after: Option<String>,
        /// The comma-delimited list of transaction statuses to get
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Create a virtual card
    CreateVirtualCard {
        /// The CreateVirtualCardRequest JSON
        #[arg(short, long)]
        request: String,
    },
    /// Update a virtual card
    UpdateVirtualCard {
        /// The virtual card ID
        #[arg(short, long)]
        id: String,
        /// The UpdateVirtualCardRequest JSON
        #[arg(short, long)]
        request: String,
    },
    /// Cancel a virtual card
    CancelVirtualCard {
        /// The virtual card ID
        #[arg(short, long)]
        id: String,
    },
    /// Reject a virtual card
    RejectVirtualCard {
        /// The virtual card ID
        #[arg(short, long)]
        id: String,
    },
    /// Request a password reset email
    ForgotPassword {
        /// The account email
        #[arg(short, long)]
        email: String,
    },
}

/// A command whose arguments have been parsed into typed requests
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// List the user's virtual cards
    GetUserVirtualCards(VirtualCardPageableRequest),
    /// Fetch one virtual card by ID
    GetVirtualCard(String),
    /// List a card's transactions with optional filters
    GetVirtualCardTransactions(String, TransactionQuery),
    /// Create a virtual card
    CreateVirtualCard(CreateVirtualCardRequest),
    /// Update the card with the given ID
    UpdateVirtualCard(String, UpdateVirtualCardRequest),
    /// Cancel the card with the given ID
    CancelVirtualCard(String),
    /// Reject the card with the given ID
    RejectVirtualCard(String),
    /// Send a password reset email to the address
    ForgotPassword(String),
}

impl TryFrom<Command> for Operation {
    type Error = AppError;

    fn try_from(command: Command) -> Result<Self, Self::Error> {
        let operation = match command {
            Command::GetUserVirtualCards { request } => {
                let request = match request.as_deref().filter(|r| !r.trim().is_empty()) {
                    Some(json) => parse_request(json)?,
                    None => VirtualCardPageableRequest::default(),
                };
                Operation::GetUserVirtualCards(request)
            }
            Command::GetVirtualCard { id } => Operation::GetVirtualCard(id),
            Command::GetVirtualCardTransactions {
                id,
                count,
                before,
                after,
                status,
            } => Operation::GetVirtualCardTransactions(
                id,
                TransactionQuery {
                    count: count.and_then(|c| u32::try_from(c).ok()),
                    before,
                    after,
                    status,
                },
            ),
            Command::CreateVirtualCard { request } => {
                Operation::CreateVirtualCard(parse_request(&request)?)
            }
            Command::UpdateVirtualCard { id, request } => {
                Operation::UpdateVirtualCard(id, parse_request(&request)?)
            }
            Command::CancelVirtualCard { id } => Operation::CancelVirtualCard(id),
            Command::RejectVirtualCard { id } => Operation::RejectVirtualCard(id),
            Command::ForgotPassword { email } => Operation::ForgotPassword(email),
        };
        Ok(operation)
    }
}

impl Operation {
    /// Runs the operation and returns the response as JSON
    pub async fn execute<S>(&self, service: &S) -> Result<Value, AppError>
    where
        S: VirtualCardService + AccountService,
    {
        let value = match self {
            Operation::GetUserVirtualCards(request) => {
                serde_json::to_value(service.get_user_virtual_cards(request).await?)?
            }
            Operation::GetVirtualCard(id) => {
                serde_json::to_value(service.get_virtual_card(id).await?)?
            }
            Operation::GetVirtualCardTransactions(id, query) => {
                serde_json::to_value(service.get_virtual_card_transactions(id, query).await?)?
            }
            Operation::CreateVirtualCard(request) => {
                serde_json::to_value(service.create_virtual_card(request).await?)?
            }
            Operation::UpdateVirtualCard(id, request) => {
                serde_json::to_value(service.update_virtual_card(id, request).await?)?
            }
            Operation::CancelVirtualCard(id) => {
                serde_json::to_value(service.cancel_virtual_card(id).await?)?
            }
            Operation::RejectVirtualCard(id) => {
                serde_json::to_value(service.reject_virtual_card(id).await?)?
            }
            Operation::ForgotPassword(email) => {
                serde_json::to_value(service.forgot_password(email).await?)?
            }
        };
        Ok(value)
    }
}

fn parse_request<T: DeserializeOwned>(json: &str) -> Result<T, AppError> {
    serde_json::from_str(json)
        .map_err(|e| AppError::InvalidInput(format!("invalid request JSON: {e}")))
}

/// Runs one command end to end and returns the pretty-printed response
///
/// The client is shut down whether or not the operation succeeded.
pub async fn run(cli: Cli, mut config: Config) -> Result<String, AppError> {
    if let Some(base_url) = cli.base_url {
        config.rest_api.base_url = base_url;
    }
    let operation = Operation::try_from(cli.command)?;
    debug!("Running {:?}", operation);

    let client = Client::new(config).await?;
    let outcome = operation.execute(&client).await;
    client.shutdown().await;

    Ok(serde_json::to_string_pretty(&outcome?)?)
}
