use chrono::{Duration, FixedOffset, TimeZone};
use proptest::prelude::*;

use common::{Candle, GapKind};
use strategy::gap;

/// Well-formed candle: `low <= min(open, close) <= max(open, close) <= high`,
/// timestamps strictly increasing one minute apart.
fn candle_series(max_len: usize) -> impl Strategy<Value = Vec<Candle>> {
    prop::collection::vec(
        (0.0001f64..10_000.0f64, 0.0f64..100.0f64, 0.0f64..1.0f64, 0.0f64..1.0f64),
        0..max_len,
    )
    .prop_map(|raw| {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let base = tz.with_ymd_and_hms(2024, 5, 6, 12, 0, 0).unwrap();
        raw.into_iter()
            .enumerate()
            .map(|(i, (low, range, open_frac, close_frac))| {
                let high = low + range;
                Candle {
                    open: low + open_frac * range,
                    high,
                    low,
                    close: low + close_frac * range,
                    timestamp: base + Duration::minutes(i as i64),
                }
            })
            .collect()
    })
}

proptest! {
    /// Detection never panics and every occurrence satisfies the bound
    /// invariant and points at an interior index.
    #[test]
    fn detected_gaps_are_well_formed(candles in candle_series(40)) {
        let gaps = gap::detect(&candles);

        if candles.len() < 3 {
            prop_assert!(gaps.is_empty());
        }
        for g in &gaps {
            prop_assert!(g.index >= 1 && g.index + 1 < candles.len());
            prop_assert!(g.low_bound < g.high_bound);
        }
        // Ascending index order, at most one occurrence per index
        for pair in gaps.windows(2) {
            prop_assert!(pair[0].index < pair[1].index);
        }
    }

    /// At every interior index exactly one of {bullish, bearish, none} holds;
    /// the reported classification matches the raw prev/next comparison.
    #[test]
    fn classification_is_mutually_exclusive(candles in candle_series(40)) {
        let gaps = gap::detect(&candles);

        for i in 1..candles.len().saturating_sub(1) {
            let prev = &candles[i - 1];
            let next = &candles[i + 1];
            let bullish = prev.high < next.low;
            let bearish = prev.low > next.high;
            prop_assert!(!(bullish && bearish), "both classifications held at {i}");

            let found = gaps.iter().find(|g| g.index == i);
            match (bullish, bearish) {
                (true, false) => prop_assert_eq!(found.map(|g| g.kind), Some(GapKind::Bullish)),
                (false, true) => prop_assert_eq!(found.map(|g| g.kind), Some(GapKind::Bearish)),
                _ => prop_assert!(found.is_none()),
            }
        }
    }
}
