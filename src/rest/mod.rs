//! Accounts REST API client.
//!
//! # Trait-based API
//!
//! The [`AccountsApi`] trait abstracts the four account operations, so code
//! written against it runs equally on [`AccountsClient`] or on a mock:
//!
//! ```rust,ignore
//! use accounts_api_client::rest::{AccountsApi, AccountsClient};
//! use accounts_api_client::types::Filter;
//!
//! async fn count<C: AccountsApi>(client: &C, filter: &Filter) -> accounts_api_client::Result<usize> {
//!     let list = client.list(None, Some(filter)).await?;
//!     Ok(list.data.len())
//! }
//! ```

mod client;
mod endpoints;
mod pagination;
mod traits;

pub use client::{AccountsClient, AccountsClientBuilder};
pub use endpoints::*;
pub use pagination::{list_all, list_stream};
pub use traits::AccountsApi;
