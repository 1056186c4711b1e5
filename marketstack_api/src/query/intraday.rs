use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use url::Url;

use super::common::{Query, QueryCommon};

/// Data interval for intraday quotes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Interval {
    Min1,
    Min5,
    Min10,
    Min15,
    Min30,
    /// The upstream default.
    #[default]
    Hour1,
    Hour3,
    Hour6,
    Hour12,
    Hour24,
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Interval::Min1 => "1min",
            Interval::Min5 => "5min",
            Interval::Min10 => "10min",
            Interval::Min15 => "15min",
            Interval::Min30 => "30min",
            Interval::Hour1 => "1hour",
            Interval::Hour3 => "3hour",
            Interval::Hour6 => "6hour",
            Interval::Hour12 => "12hour",
            Interval::Hour24 => "24hour",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Interval {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1min" => Ok(Interval::Min1),
            "5min" => Ok(Interval::Min5),
            "10min" => Ok(Interval::Min10),
            "15min" => Ok(Interval::Min15),
            "30min" => Ok(Interval::Min30),
            "1hour" => Ok(Interval::Hour1),
            "3hour" => Ok(Interval::Hour3),
            "6hour" => Ok(Interval::Hour6),
            "12hour" => Ok(Interval::Hour12),
            "24hour" => Ok(Interval::Hour24),
            _ => Err(()),
        }
    }
}

/// Query builder for the `/intraday` and `/intraday/latest` endpoints.
#[derive(Default)]
pub struct IntradayQuery {
    pub common: QueryCommon,
    pub symbols: Vec<String>,
    pub exchange: Option<String>,
    pub interval: Option<Interval>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl IntradayQuery {
    /// Adds a ticker symbol to filter by. May be called multiple times.
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbols.push(symbol.into());
        self
    }

    /// Restricts results to a single exchange, by MIC.
    pub fn with_exchange(mut self, exchange: impl Into<String>) -> Self {
        self.exchange = Some(exchange.into());
        self
    }

    /// Sets the quote interval.
    pub fn with_interval(mut self, interval: Interval) -> Self {
        self.interval = Some(interval);
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

impl Query for IntradayQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if !self.symbols.is_empty() {
            url.query_pairs_mut()
                .append_pair("symbols", self.symbols.join(",").as_str());
        }
        if let Some(exchange) = &self.exchange {
            url.query_pairs_mut()
                .append_pair("exchange", exchange.as_str());
        }
        if let Some(interval) = self.interval {
            url.query_pairs_mut()
                .append_pair("interval", interval.to_string().as_str());
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
