//! Walking every page of a list.
//!
//! Pages are requested in order starting at page 0. The walk stops at the
//! first page that is empty or carries no `next` link.

use futures_util::stream::{self, Stream, TryStreamExt};

use crate::error::AccountsError;
use crate::rest::traits::AccountsApi;
use crate::types::{AccountData, AccountList, Filter, Page};

fn following(page: Page, list: &AccountList) -> Option<Page> {
    if list.data.is_empty() || !list.has_next() {
        None
    } else {
        page.next()
    }
}

/// Collect every account matching `filter`, `page_size` accounts per request.
pub async fn list_all<C: AccountsApi>(
    client: &C,
    page_size: u32,
    filter: Option<&Filter>,
) -> Result<Vec<AccountData>, AccountsError> {
    let mut accounts = Vec::new();
    let mut page = Some(Page::first(page_size));

    while let Some(current) = page {
        let list = client.list(Some(&current), filter).await?;
        page = following(current, &list);
        tracing::debug!(
            "Fetched page {} with {} accounts",
            current.number,
            list.data.len()
        );
        accounts.extend(list.data);
    }

    Ok(accounts)
}

/// Stream every account matching `filter`, fetching pages lazily.
///
/// # Example
///
/// ```rust,no_run
/// use accounts_api_client::rest::{AccountsClient, list_stream};
/// use futures_util::TryStreamExt;
///
/// # async fn run() -> accounts_api_client::Result<()> {
/// let client = AccountsClient::new()?;
/// let accounts = list_stream(&client, 100, None);
/// futures_util::pin_mut!(accounts);
/// while let Some(account) = accounts.try_next().await? {
///     println!("{}", account.id);
/// }
/// # Ok(())
/// # }
/// ```
pub fn list_stream<C: AccountsApi>(
    client: &C,
    page_size: u32,
    filter: Option<Filter>,
) -> impl Stream<Item = Result<AccountData, AccountsError>> + '_ {
    stream::try_unfold(Some(Page::first(page_size)), move |page| {
        let filter = filter.clone();
        async move {
            let Some(current) = page else {
                return Ok::<_, AccountsError>(None);
            };
            let list = client.list(Some(&current), filter.as_ref()).await?;
            let next = following(current, &list);
            let items = stream::iter(list.data.into_iter().map(Ok::<_, AccountsError>));
            Ok::<_, AccountsError>(Some((items, next)))
        }
    })
    .try_flatten()
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use uuid::Uuid;

    use super::*;
    use crate::types::{Account, AccountResponse, Links};

    /// Serves `total` accounts in pages, advertising `next` until the last one.
    struct PagedAccounts {
        total: usize,
        requested: Mutex<Vec<Page>>,
    }

    impl PagedAccounts {
        fn new(total: usize) -> Self {
            Self {
                total,
                requested: Mutex::new(Vec::new()),
            }
        }
    }

    impl AccountsApi for PagedAccounts {
        async fn create(&self, _data: AccountData) -> Result<AccountResponse, AccountsError> {
            unimplemented!()
        }

        async fn fetch(&self, _id: Uuid) -> Result<AccountResponse, AccountsError> {
            unimplemented!()
        }

        async fn list(&self, page: Option<&Page>, _filter: Option<&Filter>) -> Result<AccountList, AccountsError> {
            let page = *page.unwrap();
            self.requested.lock().unwrap().push(page);

            let start = (page.number * page.size) as usize;
            let end = (start + page.size as usize).min(self.total);
            let data = (start..end)
                .map(|i| AccountData::new(Uuid::new_v4(), Uuid::nil(), Account::new("GB").bank_id(i.to_string())))
                .collect();
            let next = (end < self.total).then(|| format!("/v1/organisation/accounts?page[number]={}", page.number + 1));

            Ok(AccountList {
                data,
                links: Links {
                    self_link: "/v1/organisation/accounts".to_string(),
                    next,
                    ..Links::default()
                },
            })
        }

        async fn delete(&self, _id: Uuid, _version: u64) -> Result<(), AccountsError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn test_list_all_follows_next_links() {
        let client = PagedAccounts::new(7);
        let accounts = list_all(&client, 3, None).await.unwrap();

        assert_eq!(accounts.len(), 7);
        assert_eq!(accounts[0].attributes.bank_id.as_deref(), Some("0"));
        assert_eq!(accounts[6].attributes.bank_id.as_deref(), Some("6"));
        assert_eq!(
            *client.requested.lock().unwrap(),
            vec![Page::new(0, 3), Page::new(1, 3), Page::new(2, 3)]
        );
    }

    #[tokio::test]
    async fn test_list_all_empty() {
        let client = PagedAccounts::new(0);
        let accounts = list_all(&client, 10, None).await.unwrap();
        assert!(accounts.is_empty());
        assert_eq!(client.requested.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_stream_matches_list_all() {
        let client = PagedAccounts::new(5);
        let streamed: Vec<AccountData> = list_stream(&client, 2, None).try_collect().await.unwrap();
        assert_eq!(streamed.len(), 5);
        assert_eq!(streamed[4].attributes.bank_id.as_deref(), Some("4"));
    }

    #[test]
    fn test_following_stops_at_last_page_number() {
        let list = AccountList {
            data: vec![AccountData::new(Uuid::new_v4(), Uuid::nil(), Account::new("GB"))],
            links: Links {
                next: Some("/v1/organisation/accounts?page[number]=1".to_string()),
                ..Links::default()
            },
        };
        assert_eq!(following(Page::new(0, 1), &list), Some(Page::new(1, 1)));
        assert_eq!(following(Page::new(u32::MAX, 1), &list), None);
    }
}
