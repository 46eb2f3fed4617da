/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Extend user, as embedded in sign-in responses and virtual cards
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    /// User identifier
    pub id: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Email address
    pub email: String,
    /// Phone number
    pub phone: String,
    /// ISO country of the phone number
    pub phone_iso_country: String,
    /// Kind of avatar
    pub avatar_type: String,
    /// Avatar location
    pub avatar_url: String,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
    /// Preferred currency
    pub currency: String,
    /// Preferred locale
    pub locale: String,
    /// Preferred timezone
    pub timezone: String,
    /// Whether the email address was verified
    pub verified: bool,
    /// Whether an Expensify account is linked
    pub has_expensify_link: bool,
    /// Linked QuickBooks token
    pub quickbooks_token_id: String,
    /// Employee identifier within the organization
    pub employee_id: String,
    /// Sanctions applied by card issuers
    pub issuer_sanctions: Vec<IssuerSanctions>,
    /// Organization the user belongs to
    pub organization_id: String,
    /// Role within the organization
    pub organization_role: String,
}

/// Sanction status reported by a card issuer
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct IssuerSanctions {
    /// Issuer name
    pub name: String,
    /// Sanction status
    pub status: String,
}
