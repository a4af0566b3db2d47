//! Request, response and query types for the accounts API.

pub mod account;
pub mod common;
pub mod envelope;
pub mod query;
pub mod resource;

pub use account::Account;
pub use common::{ACCOUNT_RESOURCE_TYPE, AccountClassification};
pub use envelope::{AccountList, AccountRequest, AccountResponse, ErrorBody, Links};
pub use query::{Filter, ListQuery, Page};
pub use resource::AccountData;
