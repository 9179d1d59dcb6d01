pub mod config;
pub mod evaluator;
pub mod gap;

pub use config::{SignalConfig, StrategyFileConfig};
pub use evaluator::SignalEvaluator;
