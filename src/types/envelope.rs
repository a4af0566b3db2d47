//! The `{data, links}` envelopes wrapping every request and response.

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::resource::AccountData;

/// Body of a create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRequest {
    /// The account to create.
    pub data: AccountData,
}

impl AccountRequest {
    /// Wrap an account resource.
    pub fn new(data: AccountData) -> Self {
        Self { data }
    }
}

impl From<AccountData> for AccountRequest {
    fn from(data: AccountData) -> Self {
        Self::new(data)
    }
}

/// Response carrying a single account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountResponse {
    /// The account.
    pub data: AccountData,
    /// Links relative to this response.
    pub links: Links,
}

/// Response carrying a page of accounts.
///
/// The API omits `data` (or sends `null`) when no account matches; both
/// decode as an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountList {
    /// Accounts on this page.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: Vec<AccountData>,
    /// Pagination links.
    pub links: Links,
}

impl AccountList {
    /// Whether the server advertises a further page.
    pub fn has_next(&self) -> bool {
        self.links.next.is_some()
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Navigation links returned with every response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    /// Link to this response.
    #[serde(rename = "self")]
    pub self_link: String,
    /// First page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    /// Last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
    /// Next page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    /// Previous page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
}

/// Body of a failed response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error_message: String,
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::types::Account;

    #[test]
    fn test_request_wraps_data() {
        let request = AccountRequest::from(AccountData::new(Uuid::nil(), Uuid::nil(), Account::new("GB")));
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["data"]["attributes"]["country"], "GB");
        assert!(json.get("links").is_none());
    }

    #[test]
    fn test_list_without_data_is_empty() {
        let list: AccountList =
            serde_json::from_str(r#"{"links": {"self": "/v1/organisation/accounts"}}"#).unwrap();
        assert!(list.data.is_empty());
        assert!(!list.has_next());

        let list: AccountList =
            serde_json::from_str(r#"{"data": null, "links": {"self": "/v1/organisation/accounts"}}"#).unwrap();
        assert!(list.data.is_empty());
    }

    #[test]
    fn test_links_parse_pagination() {
        let json = r#"{
            "self": "/v1/organisation/accounts?page[number]=1&page[size]=2",
            "first": "/v1/organisation/accounts?page[number]=first&page[size]=2",
            "last": "/v1/organisation/accounts?page[number]=last&page[size]=2",
            "next": "/v1/organisation/accounts?page[number]=2&page[size]=2",
            "prev": "/v1/organisation/accounts?page[number]=0&page[size]=2"
        }"#;
        let links: Links = serde_json::from_str(json).unwrap();
        assert_eq!(links.self_link, "/v1/organisation/accounts?page[number]=1&page[size]=2");
        assert!(links.next.is_some());
        assert!(links.prev.is_some());
    }

    #[test]
    fn test_error_body() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"error_message": "Account cannot be created as it violates a duplicate constraint"}"#,
        )
        .unwrap();
        assert_eq!(
            body.error_message,
            "Account cannot be created as it violates a duplicate constraint"
        );
    }
}
