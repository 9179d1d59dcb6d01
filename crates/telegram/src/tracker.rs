use tracing::info;

use common::{GapKind, TradeProposal};

/// Terminal state of a tracked signal.
#[derive(Debug, Clone, PartialEq)]
pub enum SignalOutcome {
    TakeProfit { proposal: TradeProposal, price: f64 },
    StopLoss { proposal: TradeProposal, price: f64 },
}

/// Tracks the most recently published signal against subsequent closes and
/// keeps the running win/loss tally for the daily summary.
///
/// All cross-cycle state lives here; the strategy core stays stateless.
#[derive(Debug, Default)]
pub struct ResultTracker {
    active: Option<TradeProposal>,
    wins: u32,
    losses: u32,
}

impl ResultTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the tracker with a freshly published proposal. An unresolved
    /// earlier signal is replaced; at most one signal is tracked at a time.
    pub fn track(&mut self, proposal: TradeProposal) {
        self.active = Some(proposal);
    }

    /// Check the latest close against the tracked signal. When take-profit or
    /// stop-loss was crossed, clears the signal, updates the tally, and
    /// returns the outcome. Take-profit is checked first.
    pub fn update(&mut self, latest_price: f64) -> Option<SignalOutcome> {
        let won = {
            let p = self.active.as_ref()?;
            match p.direction {
                GapKind::Bullish if latest_price >= p.take_profit => Some(true),
                GapKind::Bullish if latest_price <= p.stop_loss => Some(false),
                GapKind::Bearish if latest_price <= p.take_profit => Some(true),
                GapKind::Bearish if latest_price >= p.stop_loss => Some(false),
                _ => None,
            }?
        };

        let proposal = self.active.take()?;
        if won {
            self.wins += 1;
            info!(
                entry = proposal.entry,
                price = latest_price,
                "Signal resolved: take-profit"
            );
            Some(SignalOutcome::TakeProfit {
                proposal,
                price: latest_price,
            })
        } else {
            self.losses += 1;
            info!(
                entry = proposal.entry,
                price = latest_price,
                "Signal resolved: stop-loss"
            );
            Some(SignalOutcome::StopLoss {
                proposal,
                price: latest_price,
            })
        }
    }

    pub fn has_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn losses(&self) -> u32 {
        self.losses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    fn proposal(direction: GapKind, entry: f64, stop_loss: f64, take_profit: f64) -> TradeProposal {
        TradeProposal {
            entry,
            stop_loss,
            take_profit,
            direction,
            time: FixedOffset::east_opt(2 * 3600)
                .unwrap()
                .with_ymd_and_hms(2024, 5, 6, 13, 30, 0)
                .unwrap(),
        }
    }

    #[test]
    fn untracked_update_is_a_noop() {
        let mut tracker = ResultTracker::new();
        assert!(tracker.update(100.0).is_none());
        assert_eq!(tracker.wins(), 0);
        assert_eq!(tracker.losses(), 0);
    }

    #[test]
    fn bullish_take_profit_counts_as_win() {
        let mut tracker = ResultTracker::new();
        tracker.track(proposal(GapKind::Bullish, 16.0, 10.0, 34.0));

        assert!(tracker.update(20.0).is_none()); // between bounds, still open
        let outcome = tracker.update(34.5).unwrap();
        assert!(matches!(outcome, SignalOutcome::TakeProfit { price, .. } if price == 34.5));
        assert_eq!(tracker.wins(), 1);
        assert!(!tracker.has_active());
    }

    #[test]
    fn bullish_stop_loss_counts_as_loss() {
        let mut tracker = ResultTracker::new();
        tracker.track(proposal(GapKind::Bullish, 16.0, 10.0, 34.0));

        let outcome = tracker.update(9.8).unwrap();
        assert!(matches!(outcome, SignalOutcome::StopLoss { .. }));
        assert_eq!(tracker.losses(), 1);
        assert!(!tracker.has_active());
    }

    #[test]
    fn bearish_bounds_are_mirrored() {
        let mut tracker = ResultTracker::new();
        tracker.track(proposal(GapKind::Bearish, 14.0, 20.0, -4.0));

        assert!(tracker.update(15.0).is_none());
        assert!(matches!(
            tracker.update(-5.0),
            Some(SignalOutcome::TakeProfit { .. })
        ));

        tracker.track(proposal(GapKind::Bearish, 14.0, 20.0, -4.0));
        assert!(matches!(
            tracker.update(21.0),
            Some(SignalOutcome::StopLoss { .. })
        ));
        assert_eq!(tracker.wins(), 1);
        assert_eq!(tracker.losses(), 1);
    }

    #[test]
    fn new_signal_replaces_unresolved_one() {
        let mut tracker = ResultTracker::new();
        tracker.track(proposal(GapKind::Bullish, 16.0, 10.0, 34.0));
        tracker.track(proposal(GapKind::Bullish, 50.0, 40.0, 80.0));

        // 34.5 would have resolved the first signal but not the second
        assert!(tracker.update(34.5).is_none());
        assert!(tracker.has_active());
    }
}
