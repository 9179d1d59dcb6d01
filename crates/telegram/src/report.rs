use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Composes the daily win/loss summary once per calendar day at or after the
/// configured wall-clock time.
///
/// The date latch makes "once daily" hold regardless of where the evaluation
/// cycles land: the first cycle at or past `report_time` produces the summary,
/// every later cycle that day is a no-op.
#[derive(Debug)]
pub struct DailyReport {
    report_time: NaiveTime,
    last_sent: Option<NaiveDate>,
}

impl DailyReport {
    pub fn new(report_time: NaiveTime) -> Self {
        Self {
            report_time,
            last_sent: None,
        }
    }

    /// Return the summary text if one is due at `now`, advancing the latch.
    pub fn maybe_compose(&mut self, now: NaiveDateTime, wins: u32, losses: u32) -> Option<String> {
        if now.time() < self.report_time {
            return None;
        }
        if self.last_sent == Some(now.date()) {
            return None;
        }
        self.last_sent = Some(now.date());

        let total = wins + losses;
        let win_rate = if total > 0 {
            wins as f64 * 100.0 / total as f64
        } else {
            0.0
        };
        Some(format!(
            "📊 Daily summary\n\
             Signals resolved: {total}\n\
             Wins: {wins}\n\
             Losses: {losses}\n\
             Win rate: {win_rate:.0}%"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn report() -> DailyReport {
        DailyReport::new(NaiveTime::from_hms_opt(17, 0, 0).unwrap())
    }

    #[test]
    fn not_due_before_report_time() {
        let mut r = report();
        assert!(r.maybe_compose(at(6, 16, 59), 1, 0).is_none());
    }

    #[test]
    fn composes_once_then_latches_for_the_day() {
        let mut r = report();
        let text = r.maybe_compose(at(6, 17, 3), 2, 1).unwrap();
        assert!(text.contains("Wins: 2"));
        assert!(text.contains("Losses: 1"));
        assert!(text.contains("Win rate: 67%"));

        assert!(r.maybe_compose(at(6, 18, 0), 2, 1).is_none());
        assert!(r.maybe_compose(at(6, 23, 59), 3, 1).is_none());
    }

    #[test]
    fn fires_again_the_next_day() {
        let mut r = report();
        assert!(r.maybe_compose(at(6, 17, 0), 0, 0).is_some());
        assert!(r.maybe_compose(at(7, 17, 0), 0, 0).is_some());
    }

    #[test]
    fn zero_resolved_signals_reports_zero_rate() {
        let mut r = report();
        let text = r.maybe_compose(at(6, 17, 0), 0, 0).unwrap();
        assert!(text.contains("Signals resolved: 0"));
        assert!(text.contains("Win rate: 0%"));
    }
}
