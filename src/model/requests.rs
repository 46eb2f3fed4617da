/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::presentation::card::{MccRange, Recurrence, ReferenceField};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Body of `POST /signin`
///
/// Deliberately has no `Debug` implementation so the password never reaches a log line.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct LoginRequest {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

/// Body of `DELETE /signout`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LogoutRequest {
    /// Refresh token to revoke; left empty to end the whole session
    pub refresh_token: String,
}

/// Body of `POST /renewauth`
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenLoginRequest {
    /// Refresh token obtained from the previous sign-in or renewal
    pub refresh_token: String,
}

/// Body of `POST /forgot`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ForgotPasswordRequest {
    /// Email of the account whose password should be reset
    pub email: String,
}

/// Filters and paging for `GET /virtualcards`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct VirtualCardPageableRequest {
    /// Page size
    pub count: i64,
    /// Zero-based page index
    pub page: i64,
    /// Field to sort by
    pub sort_field: String,
    /// ASC or DESC
    pub sort_direction: String,
    /// Cardholder filter
    pub cardholder: String,
    /// Recipient filter
    pub recipient: String,
    /// Cardholder-or-viewer filter
    pub cardholder_or_viewer: String,
    /// Funding credit card filter
    pub credit_card_id: String,
    /// Single status filter
    pub status: String,
    /// Multiple status filter
    pub statuses: Vec<String>,
    /// Only issued cards
    pub issued: bool,
    /// Only cards with a pending request
    pub pending_request: bool,
    /// Free text search
    pub search: String,
    /// Permission the caller must hold on the card
    pub with_permission: String,
}

impl VirtualCardPageableRequest {
    /// Creates an unfiltered request
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size and index
    #[must_use]
    pub fn with_page(mut self, count: i64, page: i64) -> Self {
        self.count = count;
        self.page = page;
        self
    }

    /// Set the status filter
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Set the free text search
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }
}

/// Body of `POST /virtualcards`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateVirtualCardRequest {
    /// Funding credit card
    pub credit_card_id: String,
    /// Recipient email
    pub recipient: String,
    /// Recipient given name
    pub recipient_first_name: String,
    /// Recipient family name
    pub recipient_last_name: String,
    /// Cardholder email
    pub cardholder: String,
    /// Display name
    pub display_name: String,
    /// Reference fields to apply
    pub reference_fields: Vec<ReferenceField>,
    /// Free-form notes
    pub notes: String,
    /// Initial balance in cents
    pub balance_cents: i64,
    /// Issue directly without approval
    pub direct: bool,
    /// ISO currency
    pub currency: String,
    /// Start of validity
    pub valid_from: String,
    /// End of validity
    pub valid_to: String,
    /// Whether the balance recurs
    pub recurs: bool,
    /// Recurrence rule
    pub recurrence: Recurrence,
    /// Receipt attachments to link
    pub receipt_attachment_ids: Vec<String>,
    /// Allowed merchant category code ranges
    pub valid_mcc_ranges: Vec<MccRange>,
}

/// Body of `PUT /virtualcards/{id}`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateVirtualCardRequest {
    /// Funding credit card
    pub credit_card_id: String,
    /// Reference fields to apply
    pub reference_fields: Vec<ReferenceField>,
    /// Display name
    pub display_name: String,
    /// Free-form notes
    pub notes: String,
    /// Balance in cents
    pub balance_cents: i64,
    /// ISO currency
    pub currency: String,
    /// Start of validity
    pub valid_from: String,
    /// End of validity
    pub valid_to: String,
    /// Whether the balance recurs
    pub recurs: bool,
    /// Recurrence rule
    pub recurrence: Recurrence,
    /// Receipt attachments to link
    pub receipt_attachment_ids: Vec<String>,
    /// Card expiry as MM/YY
    pub expiration_month_year: String,
    /// Allowed merchant category code ranges
    pub valid_mcc_ranges: Vec<MccRange>,
}
