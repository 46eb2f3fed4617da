/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::presentation::user::User;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Virtual card as returned by every card endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct VirtualCard {
    /// Card identifier
    pub id: String,
    /// Lifecycle status (ACTIVE, CANCELLED, ...)
    pub status: String,
    /// Identifier of the card recipient
    pub recipient_id: String,
    /// Card recipient
    pub recipient: User,
    /// Identifier of the cardholder
    pub cardholder_id: String,
    /// Cardholder
    pub cardholder: User,
    /// Card artwork
    pub card_image: CardImage,
    /// Display name
    pub display_name: String,
    /// Expiry date
    pub expires: String,
    /// ISO currency
    pub currency: String,
    /// Spend limit in cents
    pub limit_cents: i64,
    /// Remaining balance in cents
    pub balance_cents: i64,
    /// Amount spent in the current period, in cents
    pub spent_cents: i64,
    /// Amount spent over the card lifetime, in cents
    pub lifetime_spent_cents: i64,
    /// Whether the card waits for a budget
    pub awaiting_budget: bool,
    /// Last four digits of the card number
    pub last4: String,
    /// Number formatting hint
    pub number_format: String,
    /// Start of the validity window
    pub valid_from: String,
    /// End of the validity window
    pub valid_to: String,
    /// Timestamp since which the card is inactive
    pub inactive_since: String,
    /// Card timezone
    pub timezone: String,
    /// Funding credit card
    pub credit_card_id: String,
    /// Whether the balance recurs
    pub recurs: bool,
    /// Recurrence rule
    pub recurrence: Recurrence,
    /// Pending revision awaiting approval
    pub pending: VirtualCardRevision,
    /// Free-form notes
    pub notes: String,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
    /// Billing address
    pub address: Address,
    /// Whether the card was issued directly
    pub direct: bool,
    /// Enabled features
    pub features: VirtualCardFeature,
    /// Timestamp until which the card stays active
    pub active_until: String,
    /// Minimum transaction amount in cents
    pub min_transaction_cents: i64,
    /// Maximum transaction amount in cents
    pub max_transaction_cents: i64,
    /// Maximum number of transactions
    pub max_transaction_count: i64,
    /// Network token references
    pub token_reference_ids: String,
    /// Card network
    pub network: String,
    /// Company name printed on the card
    pub company_name: String,
    /// Display name of the funding credit card
    pub credit_card_display_name: String,
    /// Card issuer
    pub issuer: String,
    /// Allowed merchant category code ranges
    pub valid_mcc_ranges: Vec<MccRange>,
}

/// Card artwork
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CardImage {
    /// Image identifier
    pub id: String,
    /// Image media type
    pub content_type: String,
    /// Image locations keyed by size
    pub urls: BTreeMap<String, String>,
    /// Text color
    #[serde(rename = "textColorRGBA")]
    pub text_color_rgba: String,
    /// Whether text is drawn with a shadow
    pub has_text_shadow: bool,
    /// Shadow color
    #[serde(rename = "shadowTextColorRGBA")]
    pub shadow_text_color_rgba: String,
}

/// Balance recurrence rule
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Recurrence {
    /// Rule identifier
    pub id: String,
    /// Balance restored on each occurrence, in cents
    pub balance_cents: i64,
    /// DAILY, WEEKLY, MONTHLY or YEARLY
    pub period: String,
    /// Number of periods between occurrences
    pub interval: i64,
    /// How the rule ends
    pub terminator: String,
    /// Number of occurrences when terminated by count
    pub count: i64,
    /// End date when terminated by date
    pub until: String,
    /// Weekday of weekly rules
    pub by_week_day: i64,
    /// Day of month of monthly rules
    pub by_month_day: i64,
    /// Day of year of yearly rules
    pub by_year_day: i64,
    /// Previous occurrence
    pub prev_recurrence_at: String,
    /// Next occurrence
    pub next_recurrence_at: String,
    /// Occurrences so far
    pub current_count: i64,
    /// Occurrences left
    pub remaining_count: i64,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

/// Pending change to a virtual card
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct VirtualCardRevision {
    /// Requested balance in cents
    pub balance_cents: i64,
    /// Requested start of validity
    pub valid_from: String,
    /// Requested end of validity
    pub valid_to: String,
    /// Requested recurrence flag
    pub recurs: bool,
    /// Requested active-until timestamp
    pub active_until: String,
    /// Requested currency
    pub currency: String,
    /// Requested recurrence rule
    pub recurrence: Recurrence,
    /// Receipt attachments, passed through untouched
    pub receipt_attachments: BTreeMap<String, Value>,
}

/// Postal address
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Address {
    /// First address line
    pub address1: String,
    /// Second address line
    pub address2: String,
    /// City
    pub city: String,
    /// State or province
    pub province: String,
    /// Postal code
    pub postal: String,
    /// Country
    pub country: String,
}

/// Features enabled on a virtual card
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct VirtualCardFeature {
    /// Recurring balances
    pub recurrence: bool,
    /// Custom billing address
    pub custom_address: bool,
    /// Custom minimum transaction amount
    pub custom_min: bool,
    /// Custom maximum transaction amount
    pub custom_max: bool,
    /// Mobile wallet support
    pub wallets_enabled: String,
    /// Merchant category controls
    pub mcc_control: bool,
    /// QuickBooks reporting
    pub qbo_report_enabled: bool,
}

/// Inclusive range of merchant category codes
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct MccRange {
    /// Lowest code of the range
    pub lowest: String,
    /// Highest code of the range
    pub highest: String,
}

/// Reference field applied to a card or transaction
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ReferenceField {
    /// Field label
    pub field_label: String,
    /// Field code
    pub field_code: String,
    /// Selected option label
    pub option_label: String,
    /// Selected option code
    pub option_code: String,
}

impl VirtualCard {
    /// Whether the card can still be used for purchases
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status.eq_ignore_ascii_case("ACTIVE")
    }
}
