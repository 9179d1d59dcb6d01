use async_trait::async_trait;

use crate::{Candle, Result};

/// Abstraction over the intraday candle provider.
///
/// `YahooClient` in `crates/marketdata` implements this for live data. The
/// strategy core never talks to a provider directly; it only ever sees the
/// candle slice handed to it by the evaluation cycle.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Fetch the current day's candles for `symbol` at the given interval
    /// (e.g. "60m"), oldest first, with exchange-local timestamps.
    ///
    /// An empty result is reported as an error; callers treat any error as
    /// "no evaluation this cycle".
    async fn fetch(&self, symbol: &str, interval: &str) -> Result<Vec<Candle>>;
}
