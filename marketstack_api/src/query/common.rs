//! Shared query infrastructure: the [`Query`] trait, [`QueryCommon`] fields, and [`SortOrder`].

use std::fmt;
use std::str::FromStr;

use url::Url;

/// Trait implemented by all query builders. Provides URL serialization and
/// shared builder methods for pagination and sort order.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Sets the maximum number of results per response (upstream caps at 1000).
    fn with_limit(mut self, limit: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().limit = Some(limit);
        self
    }

    /// Sets the pagination offset.
    fn with_offset(mut self, offset: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().offset = Some(offset);
        self
    }

    /// Sets the sort order by record date.
    fn with_sort(mut self, sort: SortOrder) -> Self
    where
        Self: Sized,
    {
        self.get_common().sort = Some(sort);
        self
    }
}

/// Sort order for time-series results, by record date.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Oldest records first.
    Asc,
    /// Newest records first. This is the upstream default.
    #[default]
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "ASC"),
            SortOrder::Desc => write!(f, "DESC"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ASC" => Ok(SortOrder::Asc),
            "DESC" => Ok(SortOrder::Desc),
            _ => Err(()),
        }
    }
}

/// Fields shared by all query types: pagination and sort order.
#[derive(Clone, Copy, Default)]
pub struct QueryCommon {
    /// Results per response. `None` uses the API default (100).
    pub limit: Option<u32>,
    /// Pagination offset. `None` starts at 0.
    pub offset: Option<u32>,
    /// Sort order by date. `None` uses the API default (descending).
    pub sort: Option<SortOrder>,
}

impl QueryCommon {
    /// Appends the common pagination and sort parameters to the URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(limit) = self.limit {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        };
        if let Some(offset) = self.offset {
            url.query_pairs_mut()
                .append_pair("offset", &offset.to_string());
        };
        if let Some(sort) = self.sort {
            url.query_pairs_mut()
                .append_pair("sort", sort.to_string().as_str());
        };
        url
    }
}
