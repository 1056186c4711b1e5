use url::Url;

use super::common::{Query, QueryCommon};

/// Query builder for the `/tickers` endpoint.
#[derive(Default)]
pub struct TickerQuery {
    pub common: QueryCommon,
    pub search: Option<String>,
    pub exchange: Option<String>,
}

impl TickerQuery {
    /// Full-text search over ticker names and symbols.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Restricts results to a single exchange, by MIC.
    pub fn with_exchange(mut self, exchange: impl Into<String>) -> Self {
        self.exchange = Some(exchange.into());
        self
    }
}

impl Query for TickerQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if let Some(search) = &self.search {
            url.query_pairs_mut().append_pair("search", search.as_str());
        }
        if let Some(exchange) = &self.exchange {
            url.query_pairs_mut()
                .append_pair("exchange", exchange.as_str());
        }
        url
    }
}
