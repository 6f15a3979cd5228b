//! Patient payments and stored cards.
//!
//! Card data types implement `Debug` by hand so account numbers and security
//! codes never end up in logs.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreditCardInformation {
    pub account_number: Option<String>,
    pub billing_address: Option<String>,
    pub billing_zip: Option<String>,
    pub card_security_code: Option<i64>,
    pub expiration_month: Option<i64>,
    pub expiration_year: Option<i64>,
    pub name_on_card: Option<String>,
    pub department_id: Option<i64>,
}

impl fmt::Debug for CreditCardInformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreditCardInformation")
            .field("account_number", &redact_account(self.account_number.as_deref()))
            .field("billing_address", &self.billing_address)
            .field("billing_zip", &self.billing_zip)
            .field("card_security_code", &self.card_security_code.map(|_| "***"))
            .field("expiration_month", &self.expiration_month)
            .field("expiration_year", &self.expiration_year)
            .field("name_on_card", &self.name_on_card)
            .field("department_id", &self.department_id)
            .finish()
    }
}

/// A one-off card payment.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaymentInformation {
    pub card: CreditCardInformation,
    /// Amount as a decimal string, e.g. `"25.00"`.
    pub amount: Option<String>,
}

impl fmt::Debug for PaymentInformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentInformation")
            .field("card", &self.card)
            .field("amount", &self.amount)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaymentResult {
    pub payment_id: Option<String>,
    pub error_text: Option<String>,
    pub success: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoredCardUploadResult {
    pub payment_id: Option<String>,
    pub error_text: Option<String>,
    pub success: Option<bool>,
    pub stored_card_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoredCard {
    pub stored_card_id: Option<String>,
    pub status: Option<String>,
    pub card_type: Option<String>,
    pub preferred_card: Option<bool>,
    pub billing_address: Option<String>,
    pub billing_city: Option<String>,
    pub billing_state: Option<String>,
    pub billing_zip: Option<String>,
    /// `MMYYYY` as sent by the remote EHR.
    pub card_expiration_month_year: Option<String>,
    pub card_number_last_four_digits: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeleteStoredCardResult {
    pub success: Option<bool>,
}

fn redact_account(number: Option<&str>) -> Option<String> {
    number.map(|n| {
        let digits: Vec<char> = n.chars().collect();
        if digits.len() <= 4 {
            return "****".to_string();
        }
        let tail: String = digits[digits.len() - 4..].iter().collect();
        format!("****{tail}")
    })
}
