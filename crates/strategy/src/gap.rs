use common::{Candle, GapKind, GapOccurrence};

/// Scan an ordered candle sequence for fair value gaps.
///
/// For every interior index `i` the candles at `i - 1` ("prev") and `i + 1`
/// ("next") are compared; the candle at `i` itself is the gap candle and is
/// not inspected. A bullish gap exists when `prev.high < next.low`, a bearish
/// gap when `prev.low > next.high`. The two conditions are mutually exclusive
/// for well-formed candles (`high >= low`).
///
/// Sequences shorter than 3 yield an empty result. Output is in ascending
/// index order; each index contributes at most one occurrence.
pub fn detect(candles: &[Candle]) -> Vec<GapOccurrence> {
    if candles.len() < 3 {
        return Vec::new();
    }

    let mut gaps = Vec::new();
    for i in 1..candles.len() - 1 {
        let prev = &candles[i - 1];
        let next = &candles[i + 1];

        if prev.high < next.low {
            gaps.push(GapOccurrence {
                index: i,
                kind: GapKind::Bullish,
                low_bound: prev.high,
                high_bound: next.low,
            });
        } else if prev.low > next.high {
            gaps.push(GapOccurrence {
                index: i,
                kind: GapKind::Bearish,
                low_bound: next.high,
                high_bound: prev.low,
            });
        }
    }
    gaps
}
