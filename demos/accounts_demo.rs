//! Example: create, fetch, list and delete an account.
//!
//! Run against a local accounts API:
//!
//! ```sh
//! ACCOUNTS_API_URL=http://localhost:8080 RUST_LOG=debug cargo run --example accounts_demo
//! ```

use accounts_api_client::rest::{AccountsClientBuilder, list_stream};
use accounts_api_client::types::{Account, AccountClassification, AccountData, Filter};
use futures_util::TryStreamExt;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = AccountsClientBuilder::from_env().build()?;
    println!("Using accounts API at {}", client.base_url());

    let organisation_id = Uuid::new_v4();
    let attributes = Account::new("GB")
        .base_currency("GBP")
        .bank_id("400302")
        .bank_id_code("GBDSC")
        .bic("NWBKGB42")
        .account_classification(AccountClassification::Personal);

    let created = client
        .create(AccountData::with_random_id(organisation_id, attributes))
        .await?;
    println!("Created account {}", created.data.id);

    let fetched = client.fetch(created.data.id).await?;
    println!(
        "Fetched account {} (version {:?}, iban {:?})",
        fetched.data.id, fetched.data.version, fetched.data.attributes.iban
    );

    let accounts = list_stream(&client, 50, Some(Filter::organisation(organisation_id)));
    futures_util::pin_mut!(accounts);
    while let Some(account) = accounts.try_next().await? {
        println!("Listed account {} in {}", account.id, account.attributes.country);
    }

    // Invalid fields never reach the server.
    let invalid = AccountData::with_random_id(organisation_id, Account::new("GBR"));
    if let Err(e) = client.create(invalid).await {
        println!("Rejected: {}", e);
    }

    client
        .delete(fetched.data.id, fetched.data.version.unwrap_or(0))
        .await?;
    println!("Deleted account {}", fetched.data.id);

    Ok(())
}
