pub mod notifier;
pub mod report;
pub mod tracker;

pub use notifier::TelegramNotifier;
pub use report::DailyReport;
pub use tracker::{ResultTracker, SignalOutcome};
