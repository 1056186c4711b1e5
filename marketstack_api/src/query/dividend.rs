use chrono::NaiveDate;
use url::Url;

use super::common::{Query, QueryCommon};

/// Query builder for the `/dividends` endpoint.
#[derive(Default)]
pub struct DividendQuery {
    pub common: QueryCommon,
    pub symbols: Vec<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl DividendQuery {
    /// Adds a ticker symbol to filter by. May be called multiple times.
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbols.push(symbol.into());
        self
    }

    /// Sets the inclusive start date of the range.
    pub fn with_date_from(mut self, date_from: NaiveDate) -> Self {
        self.date_from = Some(date_from);
        self
    }

    /// Sets the inclusive end date of the range.
    pub fn with_date_to(mut self, date_to: NaiveDate) -> Self {
        self.date_to = Some(date_to);
        self
    }
}

impl Query for DividendQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if !self.symbols.is_empty() {
            url.query_pairs_mut()
                .append_pair("symbols", self.symbols.join(",").as_str());
        }
        if let Some(date_from) = self.date_from {
            url.query_pairs_mut()
                .append_pair("date_from", date_from.format("%Y-%m-%d").to_string().as_str());
        }
        if let Some(date_to) = self.date_to {
            url.query_pairs_mut()
                .append_pair("date_to", date_to.format("%Y-%m-%d").to_string().as_str());
        }
        url
    }
}
