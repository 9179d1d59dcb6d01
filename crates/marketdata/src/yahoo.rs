//! Yahoo Finance candle provider.
//!
//! Fetches one day of intraday OHLC bars from Yahoo's v8 chart API and
//! converts the timestamps to the exchange's local offset, which the chart
//! metadata carries as `gmtoffset`. Yahoo has no official API and rejects
//! requests without a browser user-agent.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use common::{Candle, Error, MarketDataSource, Result};

const BASE_URL: &str = "https://query1.finance.yahoo.com";

/// REST client for the Yahoo Finance chart API.
pub struct YahooClient {
    http: Client,
}

impl YahooClient {
    pub fn new() -> Self {
        Self {
            http: Client::builder()
                .use_rustls_tls()
                .timeout(Duration::from_secs(30))
                .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
                .build()
                .expect("Failed to build HTTP client"),
        }
    }

    fn chart_url(symbol: &str, interval: &str) -> String {
        format!("{BASE_URL}/v8/finance/chart/{symbol}?range=1d&interval={interval}")
    }

    /// Parse a chart API response into exchange-local candles.
    ///
    /// Rows with any missing OHLC value (holidays, non-trading slots) are
    /// skipped. An empty series is an error so the caller can log and skip
    /// the cycle.
    fn parse_chart(symbol: &str, resp: ChartResponse) -> Result<Vec<Candle>> {
        let result = resp.chart.result.ok_or_else(|| match resp.chart.error {
            Some(err) => Error::MarketData(format!("{}: {}", err.code, err.description)),
            None => Error::MarketData(format!("empty chart result for {symbol}")),
        })?;

        let data = result
            .into_iter()
            .next()
            .ok_or_else(|| Error::MarketData(format!("no chart data for {symbol}")))?;

        let offset = FixedOffset::east_opt(data.meta.gmtoffset).ok_or_else(|| {
            Error::MarketData(format!(
                "invalid gmtoffset {} for {symbol}",
                data.meta.gmtoffset
            ))
        })?;

        let timestamps = data.timestamp.unwrap_or_default();
        let quote = data
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| Error::MarketData(format!("no quote data for {symbol}")))?;

        let mut candles = Vec::with_capacity(timestamps.len());
        for (i, &ts) in timestamps.iter().enumerate() {
            let open = quote.open.get(i).copied().flatten();
            let high = quote.high.get(i).copied().flatten();
            let low = quote.low.get(i).copied().flatten();
            let close = quote.close.get(i).copied().flatten();

            let (Some(open), Some(high), Some(low), Some(close)) = (open, high, low, close)
            else {
                continue;
            };

            let timestamp = DateTime::from_timestamp(ts, 0)
                .ok_or_else(|| Error::MarketData(format!("invalid timestamp: {ts}")))?
                .with_timezone(&offset);

            candles.push(Candle {
                open,
                high,
                low,
                close,
                timestamp,
            });
        }

        if candles.is_empty() {
            return Err(Error::MarketData(format!("no candles returned for {symbol}")));
        }

        Ok(candles)
    }
}

impl Default for YahooClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketDataSource for YahooClient {
    async fn fetch(&self, symbol: &str, interval: &str) -> Result<Vec<Candle>> {
        let url = Self::chart_url(symbol, interval);
        debug!(symbol, interval, "Requesting candles from Yahoo");

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::MarketData(format!("HTTP {status}: {body}")));
        }

        let chart: ChartResponse = resp.json().await.map_err(|e| Error::Http(e.to_string()))?;
        let candles = Self::parse_chart(symbol, chart)?;
        info!(symbol, candles = candles.len(), "Loaded candles");
        Ok(candles)
    }
}

// ─── Response types ───────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartResult,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    meta: ChartMeta,
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct ChartMeta {
    /// Exchange UTC offset in seconds.
    gmtoffset: i32,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteData>,
}

#[derive(Debug, Deserialize)]
struct QuoteData {
    open: Vec<Option<f64>>,
    high: Vec<Option<f64>>,
    low: Vec<Option<f64>>,
    close: Vec<Option<f64>>,
}
