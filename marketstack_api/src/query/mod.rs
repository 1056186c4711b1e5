mod common;
pub use self::common::{Query, SortOrder};

mod eod;
pub use self::eod::EodQuery;

mod intraday;
pub use self::intraday::{Interval, IntradayQuery};

mod dividend;
pub use self::dividend::DividendQuery;

mod split;
pub use self::split::SplitQuery;

mod ticker;
pub use self::ticker::TickerQuery;
