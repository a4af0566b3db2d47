//! # Accounts API Client
//!
//! An async Rust client library for the organisation accounts REST API.
//!
//! ## Features
//!
//! - Create, fetch, list and delete accounts
//! - Pagination and organisation filtering, with helpers to walk every page
//! - Client-side validation of account fields before they are sent
//! - Typed errors carrying the API's `error_message`
//! - Automatic retries of transient failures and `tracing` spans per request
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use accounts_api_client::rest::AccountsClient;
//! use accounts_api_client::types::{Filter, Page};
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AccountsClient::builder().base_url("http://localhost:8080").build()?;
//!     let organisation_id = Uuid::new_v4();
//!     let list = client
//!         .list(Some(&Page::first(10)), Some(&Filter::organisation(organisation_id)))
//!         .await?;
//!     println!("{} accounts", list.data.len());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod rest;
pub mod types;
pub mod validation;

// Re-export commonly used types at crate root
pub use error::{AccountsError, ApiError};
pub use rest::{AccountsApi, AccountsClient, AccountsClientBuilder};
pub use types::{Account, AccountData, Filter, Page};
pub use validation::ValidationError;

/// Result type alias using AccountsError
pub type Result<T> = std::result::Result<T, AccountsError>;
