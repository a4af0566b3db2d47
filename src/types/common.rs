//! Common domain types for the accounts API.

use serde::{Deserialize, Serialize};

/// The JSON:API `type` of an account resource.
pub const ACCOUNT_RESOURCE_TYPE: &str = "accounts";

/// Classification of an account holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountClassification {
    /// Account held by an individual
    Personal,
    /// Account held by a company
    Business,
}

impl AccountClassification {
    /// The wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountClassification::Personal => "Personal",
            AccountClassification::Business => "Business",
        }
    }
}

impl std::fmt::Display for AccountClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AccountClassification {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Personal" => Ok(AccountClassification::Personal),
            "Business" => Ok(AccountClassification::Business),
            other => Err(format!("unknown account classification: {other}")),
        }
    }
}

impl From<AccountClassification> for String {
    fn from(value: AccountClassification) -> Self {
        value.as_str().to_string()
    }
}
