//! Trait definition for the accounts REST API client.
//!
//! [`AccountsApi`] abstracts the account operations so callers can swap in a
//! mock implementation for testing or wrap the client in a decorator.

use std::future::Future;

use uuid::Uuid;

use crate::error::AccountsError;
use crate::types::{AccountData, AccountList, AccountResponse, Filter, Page};

/// Trait defining the accounts API operations.
///
/// All methods are async and return `Result<T, AccountsError>`.
pub trait AccountsApi: Send + Sync {
    /// Create an account.
    fn create(
        &self,
        data: AccountData,
    ) -> impl Future<Output = Result<AccountResponse, AccountsError>> + Send;

    /// Fetch an account by id.
    fn fetch(&self, id: Uuid) -> impl Future<Output = Result<AccountResponse, AccountsError>> + Send;

    /// List accounts, optionally paginated and filtered.
    fn list(
        &self,
        page: Option<&Page>,
        filter: Option<&Filter>,
    ) -> impl Future<Output = Result<AccountList, AccountsError>> + Send;

    /// Delete an account at the given version.
    fn delete(&self, id: Uuid, version: u64) -> impl Future<Output = Result<(), AccountsError>> + Send;
}
