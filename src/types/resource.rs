//! The account resource object carried in the `data` member.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::types::account::Account;
use crate::types::common::ACCOUNT_RESOURCE_TYPE;

/// An account resource: identity, metadata and [`Account`] attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountData {
    /// Unique id of the account.
    pub id: Uuid,
    /// Organisation that owns the account.
    pub organisation_id: Uuid,
    /// Resource type, always `accounts` for this API.
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Creation time, set by the server.
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_on: Option<OffsetDateTime>,
    /// Last modification time, set by the server.
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub modified_on: Option<OffsetDateTime>,
    /// Record version, required to delete the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
    /// Account attributes.
    pub attributes: Account,
}

impl AccountData {
    /// Create a new account resource of type `accounts`.
    pub fn new(id: Uuid, organisation_id: Uuid, attributes: Account) -> Self {
        Self {
            id,
            organisation_id,
            resource_type: ACCOUNT_RESOURCE_TYPE.to_string(),
            created_on: None,
            modified_on: None,
            version: None,
            attributes,
        }
    }

    /// Create a new account resource with a random v4 id.
    pub fn with_random_id(organisation_id: Uuid, attributes: Account) -> Self {
        Self::new(Uuid::new_v4(), organisation_id, attributes)
    }

    /// Override the resource type.
    pub fn resource_type(mut self, resource_type: impl Into<String>) -> Self {
        self.resource_type = resource_type.into();
        self
    }

    /// Set the creation time.
    pub fn created_on(mut self, created_on: OffsetDateTime) -> Self {
        self.created_on = Some(created_on);
        self
    }

    /// Set the modification time.
    pub fn modified_on(mut self, modified_on: OffsetDateTime) -> Self {
        self.modified_on = Some(modified_on);
        self
    }

    /// Set the record version.
    pub fn version(mut self, version: u64) -> Self {
        self.version = Some(version);
        self
    }

    /// Replace the attributes.
    pub fn attributes(mut self, attributes: Account) -> Self {
        self.attributes = attributes;
        self
    }
}
