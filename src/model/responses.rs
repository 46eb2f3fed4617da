/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::presentation::card::VirtualCard;
use crate::presentation::transaction::Transaction;
use crate::presentation::user::User;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Plain acknowledgement message
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct SimpleResponse {
    /// Message returned by the server
    pub msg: String,
}

/// Response of `POST /signin` and `POST /renewauth`
///
/// Carries credentials, so it has no `Debug` or `Display` implementation.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginSignUpResponse {
    /// Signed-in user
    pub user: User,
    /// Short-lived access token
    pub token: String,
    /// Refresh token for the next renewal
    pub refresh_token: String,
}

/// Pagination metadata
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Pagination {
    /// Current page index
    pub page: i64,
    /// Items on the current page
    pub page_item_count: i64,
    /// Items across all pages
    pub total_items: i64,
    /// Number of pages
    pub number_of_pages: i64,
}

/// Response of `GET /virtualcards`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct VirtualCardsResponse {
    /// Paging metadata
    pub pagination: Pagination,
    /// Cards on this page
    pub virtual_cards: Vec<VirtualCard>,
}

/// Response of every single-card endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct VirtualCardResponse {
    /// The card
    pub virtual_card: VirtualCard,
}

/// Response of `GET /virtualcards/{id}/transactions`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct TransactionsResponse {
    /// Transactions matching the filters
    pub transactions: Vec<Transaction>,
}
