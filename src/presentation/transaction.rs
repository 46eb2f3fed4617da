/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::presentation::card::ReferenceField;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Transaction made with a virtual card
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Transaction {
    /// Transaction identifier
    pub id: String,
    /// Cardholder identifier
    pub cardholder_id: String,
    /// Cardholder name
    pub cardholder_name: String,
    /// Cardholder email
    pub cardholder_email: String,
    /// Recipient name
    pub recipient_name: String,
    /// Recipient email
    pub recipient_email: String,
    /// Recipient identifier
    pub recipient_id: String,
    /// Name printed on the card
    pub name_on_card: String,
    /// Origin of the transaction
    pub source: String,
    /// Last four digits of the virtual card number
    pub vcn_last4: String,
    /// Display name of the virtual card
    pub vcn_display_name: String,
    /// Virtual card identifier
    pub virtual_card_id: String,
    /// Transaction type
    #[serde(rename = "type")]
    pub transaction_type: String,
    /// PENDING, CLEARED, DECLINED, ...
    pub status: String,
    /// Reasons for a decline
    pub decline_reasons: Vec<DeclineReason>,
    /// Authorization approval code
    pub approval_code: String,
    /// Authorized amount in the billing currency, in cents
    pub auth_billing_amount_cents: i64,
    /// Billing currency at authorization
    pub auth_billing_currency: String,
    /// Authorized amount in the merchant currency, in cents
    pub auth_merchant_amount_cents: i64,
    /// Merchant currency at authorization
    pub auth_merchant_currency: String,
    /// Exchange rate at authorization
    pub auth_exchange_rate: f64,
    /// Cleared amount in the billing currency, in cents
    pub clearing_billing_amount_cents: i64,
    /// Billing currency at clearing
    pub clearing_billing_currency: String,
    /// Cleared amount in the merchant currency, in cents
    pub clearing_merchant_amount_cents: i64,
    /// Merchant currency at clearing
    pub clearing_merchant_currency: String,
    /// Exchange rate at clearing
    pub clearing_exchange_rate: f64,
    /// Merchant category code
    pub mcc: String,
    /// Merchant category group
    pub mcc_group: String,
    /// Merchant category description
    pub mcc_description: String,
    /// Merchant identifier
    pub merchant_id: String,
    /// Merchant name
    pub merchant_name: String,
    /// Merchant street address
    pub merchant_address: String,
    /// Merchant city
    pub merchant_city: String,
    /// Merchant state
    pub merchant_state: String,
    /// Merchant country
    pub merchant_country: String,
    /// Merchant postal code
    pub merchant_zip: String,
    /// Authorization timestamp
    pub authed_at: String,
    /// Clearing timestamp
    pub cleared_at: String,
    /// Last update timestamp
    pub updated_at: String,
    /// Whether receipts are attached
    pub has_attachments: bool,
    /// Network reference
    pub reference_id: String,
    /// Funding credit card
    pub credit_card_id: String,
    /// Exported to Expensify
    pub sent_to_expensify: bool,
    /// Exported to QuickBooks
    pub sent_to_quickbooks: bool,
    /// Number of attachments
    pub attachments_count: i64,
    /// Reference fields applied to the transaction
    pub reference_fields: Vec<ReferenceField>,
    /// Display name of the funding credit card
    pub credit_card_display_name: String,
}

/// Reason attached to a declined transaction
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct DeclineReason {
    /// Decline code
    pub code: String,
    /// Human readable description
    pub description: String,
}

impl Transaction {
    /// Amount that settles against the card: cleared amount once cleared, authorized amount before
    #[must_use]
    pub fn settled_amount_cents(&self) -> i64 {
        if self.status.eq_ignore_ascii_case("CLEARED") {
            self.clearing_billing_amount_cents
        } else {
            self.auth_billing_amount_cents
        }
    }
}
