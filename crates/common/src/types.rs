use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One OHLC candle in the instrument's exchange timezone.
///
/// The data source guarantees strictly increasing timestamps, no duplicates,
/// and `low <= high`. Candles are immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    /// Exchange-local timestamp (offset supplied by the data source).
    pub timestamp: DateTime<FixedOffset>,
}

/// Direction of a fair value gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GapKind {
    Bullish,
    Bearish,
}

impl std::fmt::Display for GapKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GapKind::Bullish => write!(f, "bullish"),
            GapKind::Bearish => write!(f, "bearish"),
        }
    }
}

/// A detected fair value gap: a 3-candle pattern centered at `index`, where
/// the high/low ranges of the candles at `index - 1` and `index + 1` do not
/// overlap.
///
/// Invariant: `low_bound < high_bound`.
#[derive(Debug, Clone, PartialEq)]
pub struct GapOccurrence {
    /// Position of the center candle in the sequence given to the detector.
    pub index: usize,
    pub kind: GapKind,
    pub low_bound: f64,
    pub high_bound: f64,
}

/// A fully populated trade proposal derived from the most recent gap.
/// Never partially filled; ownership transfers to the caller on return.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeProposal {
    pub entry: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
    pub direction: GapKind,
    pub time: DateTime<FixedOffset>,
}
