use chrono::NaiveTime;

use common::{Candle, GapKind, TradeProposal};

use crate::config::SignalConfig;
use crate::gap;

/// Fixed reward-to-risk ratio applied to every proposal. Compiled-in constant,
/// not user-configurable.
const REWARD_RISK_RATIO: f64 = 3.0;

/// Evaluates a candle series for a tradeable fair value gap.
///
/// Filters candles to the trading window, detects gaps over the windowed
/// sequence, and derives a proposal from the most recent one. Pure and
/// stateless between calls; safe to use from multiple tasks on independent
/// inputs.
#[derive(Debug, Clone)]
pub struct SignalEvaluator {
    /// Inclusive start of the trading window (exchange-local time of day).
    pub window_start: NaiveTime,
    /// Inclusive end of the trading window.
    pub window_end: NaiveTime,
}

impl Default for SignalEvaluator {
    fn default() -> Self {
        Self {
            window_start: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            window_end: NaiveTime::from_hms_opt(14, 29, 0).unwrap(),
        }
    }
}

impl SignalEvaluator {
    pub fn new(window_start: NaiveTime, window_end: NaiveTime) -> Self {
        assert!(
            window_start < window_end,
            "Trading window start must precede its end"
        );
        Self { window_start, window_end }
    }

    pub fn from_config(cfg: &SignalConfig) -> Self {
        Self::new(cfg.window_start(), cfg.window_end())
    }

    /// Evaluate one candle series. Returns `None` for every abnormal
    /// condition (window too small, no gap, boundary guard); absence is a
    /// first-class outcome here, never an error.
    pub fn evaluate(&self, candles: &[Candle]) -> Option<TradeProposal> {
        let window: Vec<Candle> = candles
            .iter()
            .filter(|c| {
                let t = c.timestamp.time();
                t >= self.window_start && t <= self.window_end
            })
            .cloned()
            .collect();

        if window.len() < 3 {
            return None;
        }

        let gaps = gap::detect(&window);

        // Most recent gap wins: detection output is ascending, so the last
        // occurrence carries the largest index.
        let occurrence = gaps.last()?;

        // Guard against referencing past the end of the window.
        if occurrence.index + 1 >= window.len() {
            return None;
        }

        let confirm = &window[occurrence.index + 1];
        let entry = confirm.close;
        let stop_loss = match occurrence.kind {
            GapKind::Bullish => occurrence.low_bound,
            GapKind::Bearish => occurrence.high_bound,
        };
        let risk = (entry - stop_loss).abs();
        let take_profit = match occurrence.kind {
            GapKind::Bullish => entry + REWARD_RISK_RATIO * risk,
            GapKind::Bearish => entry - REWARD_RISK_RATIO * risk,
        };

        Some(TradeProposal {
            entry,
            stop_loss,
            take_profit,
            direction: occurrence.kind,
            time: confirm.timestamp,
        })
    }
}
