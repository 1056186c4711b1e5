mod client;
mod errors;
mod query;
pub mod types;
pub use self::client::Client;
pub use self::errors::Error;
pub use self::query::{
    DividendQuery, EodQuery, Interval, IntradayQuery, Query, SortOrder, SplitQuery, TickerQuery,
};
