mod meta;
pub use self::meta::{ApiError, ErrorEnvelope, PaginatedResponse, Pagination};

mod eod;
pub use self::eod::EodBar;

mod intraday;
pub use self::intraday::IntradayBar;

mod dividend;
pub use self::dividend::Dividend;

mod split;
pub use self::split::Split;

mod ticker;
pub use self::ticker::{StockExchange, Ticker};
