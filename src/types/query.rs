//! Pagination and filter parameters for listing accounts.

use serde::Serialize;
use uuid::Uuid;

/// A pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Page {
    /// Zero-based page number.
    pub number: u32,
    /// Number of accounts per page.
    pub size: u32,
}

impl Page {
    /// Create a page window.
    pub fn new(number: u32, size: u32) -> Self {
        Self { number, size }
    }

    /// The first page of the given size.
    pub fn first(size: u32) -> Self {
        Self::new(0, size)
    }

    /// The page following this one, or `None` past the last page number.
    pub fn next(&self) -> Option<Self> {
        Some(Self::new(self.number.checked_add(1)?, self.size))
    }
}

/// Restricts which accounts are listed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    /// Only list accounts owned by this organisation.
    pub organisation_id: Option<Uuid>,
}

impl Filter {
    /// Filter by owning organisation.
    pub fn organisation(organisation_id: Uuid) -> Self {
        Self {
            organisation_id: Some(organisation_id),
        }
    }
}

/// Query parameters of a list request.
///
/// Serializes to `page[number]=..&page[size]=..&filter[organisation_id]=..`,
/// dropping whatever was not supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListQuery {
    #[serde(rename = "page[number]", skip_serializing_if = "Option::is_none")]
    page_number: Option<u32>,
    #[serde(rename = "page[size]", skip_serializing_if = "Option::is_none")]
    page_size: Option<u32>,
    #[serde(rename = "filter[organisation_id]", skip_serializing_if = "Option::is_none")]
    organisation_id: Option<Uuid>,
}

impl ListQuery {
    /// Build the query from an optional page and filter.
    pub fn new(page: Option<&Page>, filter: Option<&Filter>) -> Self {
        Self {
            page_number: page.map(|p| p.number),
            page_size: page.map(|p| p.size),
            organisation_id: filter.and_then(|f| f.organisation_id),
        }
    }

    /// Whether no parameter is set.
    pub fn is_empty(&self) -> bool {
        self.page_number.is_none() && self.page_size.is_none() && self.organisation_id.is_none()
    }

    /// Encode as a URL query string, without the leading `?`.
    pub fn to_query_string(&self) -> Result<String, serde_urlencoded::ser::Error> {
        serde_urlencoded::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query() {
        let query = ListQuery::new(None, None);
        assert!(query.is_empty());
        assert_eq!(query.to_query_string().unwrap(), "");
    }

    #[test]
    fn test_empty_filter_adds_nothing() {
        let query = ListQuery::new(None, Some(&Filter::default()));
        assert!(query.is_empty());
    }

    #[test]
    fn test_page_only() {
        let query = ListQuery::new(Some(&Page::new(2, 10)), None);
        assert_eq!(
            query.to_query_string().unwrap(),
            "page%5Bnumber%5D=2&page%5Bsize%5D=10"
        );
    }

    #[test]
    fn test_page_and_filter() {
        let filter = Filter::organisation(Uuid::nil());
        let query = ListQuery::new(Some(&Page::first(5)), Some(&filter));
        assert_eq!(
            query.to_query_string().unwrap(),
            "page%5Bnumber%5D=0&page%5Bsize%5D=5&filter%5Borganisation_id%5D=00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_page_next() {
        assert_eq!(Page::first(10).next(), Some(Page::new(1, 10)));
        assert_eq!(Page::new(u32::MAX, 10).next(), None);
    }
}
