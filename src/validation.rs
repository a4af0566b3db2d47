//! Client-side pre-validation of account attributes.
//!
//! These checks mirror the server's own field rules so that an obviously
//! invalid create request fails locally instead of costing a round trip.
//! Rules run in a fixed order and the first failure wins:
//!
//! 1. `bic`: six letters followed by two or five letters/digits
//! 2. `account_classification`: `Personal` or `Business`
//! 3. `bank_id`: at most 16 uppercase letters/digits
//! 4. `base_currency`: three uppercase letters
//! 5. `country`: two uppercase letters (always checked)
//! 6. `alternative_bank_account_names`: at most three names

use thiserror::Error;

use crate::types::Account;

/// Maximum number of alternative bank account names.
pub const MAX_ALTERNATIVE_NAMES: usize = 3;

/// Maximum length of a bank id.
pub const MAX_BANK_ID_LEN: usize = 16;

/// A field that failed client-side validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid BIC [{0}]")]
    Bic(String),

    #[error("Invalid AccountClassification [{0}]")]
    AccountClassification(String),

    #[error("Invalid BankID [{0}]")]
    BankId(String),

    #[error("Invalid BaseCurrency [{0}]")]
    BaseCurrency(String),

    #[error("Invalid Country [{0}]")]
    Country(String),

    #[error("Invalid AlternativeBankAccountNames [{}]", .0.join(" "))]
    AlternativeBankAccountNames(Vec<String>),
}

/// Validate account attributes before they are sent.
pub fn validate_account(account: &Account) -> Result<(), ValidationError> {
    if let Some(bic) = &account.bic {
        if !is_valid_bic(bic) {
            return Err(ValidationError::Bic(bic.clone()));
        }
    }

    if let Some(classification) = &account.account_classification {
        if !matches!(classification.as_str(), "Personal" | "Business") {
            return Err(ValidationError::AccountClassification(classification.clone()));
        }
    }

    if let Some(bank_id) = &account.bank_id {
        if bank_id.len() > MAX_BANK_ID_LEN || !bank_id.chars().all(is_upper_alphanumeric) {
            return Err(ValidationError::BankId(bank_id.clone()));
        }
    }

    if let Some(currency) = &account.base_currency {
        if !is_upper_alpha_of_len(currency, 3) {
            return Err(ValidationError::BaseCurrency(currency.clone()));
        }
    }

    if !is_upper_alpha_of_len(&account.country, 2) {
        return Err(ValidationError::Country(account.country.clone()));
    }

    if let Some(names) = &account.alternative_bank_account_names {
        if names.len() > MAX_ALTERNATIVE_NAMES {
            return Err(ValidationError::AlternativeBankAccountNames(names.clone()));
        }
    }

    Ok(())
}

/// Bank code (6 letters) + location/branch (2 or 5 letters/digits).
fn is_valid_bic(bic: &str) -> bool {
    let bytes = bic.as_bytes();
    if bytes.len() != 8 && bytes.len() != 11 {
        return false;
    }
    bytes[..6].iter().all(u8::is_ascii_uppercase)
        && bytes[6..].iter().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}

fn is_upper_alphanumeric(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit()
}

fn is_upper_alpha_of_len(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_uppercase())
}
