//! Account attributes.

use serde::{Deserialize, Serialize};

/// Attributes of an account resource.
///
/// Only `country` is required. Every other field is omitted from the
/// serialized payload when unset.
///
/// # Example
///
/// ```rust
/// use accounts_api_client::types::{Account, AccountClassification};
///
/// let account = Account::new("GB")
///     .base_currency("GBP")
///     .bank_id("400302")
///     .bank_id_code("GBDSC")
///     .bic("NWBKGB42")
///     .account_classification(AccountClassification::Personal);
///
/// let json = serde_json::to_value(&account).unwrap();
/// assert_eq!(json["country"], "GB");
/// assert_eq!(json["account_classification"], "Personal");
/// assert!(json.get("iban").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// ISO 3166-1 alpha-2 country code.
    pub country: String,
    /// ISO 4217 currency code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_currency: Option<String>,
    /// Local country bank identifier (sort code in the UK).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_id: Option<String>,
    /// Identifies the type of `bank_id` (e.g. `GBDSC`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_id_code: Option<String>,
    /// Account number. Generated by the server when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    /// SWIFT BIC.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,
    /// IBAN. Generated by the server when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    /// Free-form customer reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// Title of the account holder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// First name of the account holder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Primary account name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_account_name: Option<String>,
    /// Up to three alternative account names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_bank_account_names: Option<Vec<String>>,
    /// `Personal` or `Business`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_classification: Option<String>,
    /// Whether the account is held jointly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joint_account: Option<bool>,
    /// Opt out of account name matching.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_matching_opt_out: Option<bool>,
    /// Secondary identification, e.g. a building society roll number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_identification: Option<String>,
}

impl Account {
    /// Create account attributes for the given country.
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            base_currency: None,
            bank_id: None,
            bank_id_code: None,
            account_number: None,
            bic: None,
            iban: None,
            customer_id: None,
            title: None,
            first_name: None,
            bank_account_name: None,
            alternative_bank_account_names: None,
            account_classification: None,
            joint_account: None,
            account_matching_opt_out: None,
            secondary_identification: None,
        }
    }

    /// Set the country.
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Set the base currency.
    pub fn base_currency(mut self, currency: impl Into<String>) -> Self {
        self.base_currency = Some(currency.into());
        self
    }

    /// Set the bank id.
    pub fn bank_id(mut self, bank_id: impl Into<String>) -> Self {
        self.bank_id = Some(bank_id.into());
        self
    }

    /// Set the bank id code.
    pub fn bank_id_code(mut self, code: impl Into<String>) -> Self {
        self.bank_id_code = Some(code.into());
        self
    }

    /// Set the account number.
    pub fn account_number(mut self, number: impl Into<String>) -> Self {
        self.account_number = Some(number.into());
        self
    }

    /// Set the BIC.
    pub fn bic(mut self, bic: impl Into<String>) -> Self {
        self.bic = Some(bic.into());
        self
    }

    /// Set the IBAN.
    pub fn iban(mut self, iban: impl Into<String>) -> Self {
        self.iban = Some(iban.into());
        self
    }

    /// Set the customer id.
    pub fn customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the first name.
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Set the bank account name.
    pub fn bank_account_name(mut self, name: impl Into<String>) -> Self {
        self.bank_account_name = Some(name.into());
        self
    }

    /// Set the alternative bank account names.
    pub fn alternative_bank_account_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alternative_bank_account_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Set the account classification.
    ///
    /// Accepts an [`AccountClassification`](crate::types::AccountClassification)
    /// or a raw string.
    pub fn account_classification(mut self, classification: impl Into<String>) -> Self {
        self.account_classification = Some(classification.into());
        self
    }

    /// Mark the account as joint or not.
    pub fn joint_account(mut self, joint: bool) -> Self {
        self.joint_account = Some(joint);
        self
    }

    /// Set the account matching opt-out flag.
    pub fn account_matching_opt_out(mut self, opt_out: bool) -> Self {
        self.account_matching_opt_out = Some(opt_out);
        self
    }

    /// Set the secondary identification.
    pub fn secondary_identification(mut self, identification: impl Into<String>) -> Self {
        self.secondary_identification = Some(identification.into());
        self
    }
}
