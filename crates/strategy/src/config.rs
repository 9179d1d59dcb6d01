use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Top-level strategy config file (TOML).
///
/// Example `config/fvgbot.toml`:
/// ```toml
/// [signal]
/// symbol = "XDAX.L"
/// interval = "60m"
/// window_start = "12:00"
/// window_end = "14:29"
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StrategyFileConfig {
    pub signal: SignalConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SignalConfig {
    /// Instrument symbol as the data provider knows it, e.g. "XDAX.L".
    pub symbol: String,
    /// Candle interval, e.g. "60m".
    pub interval: String,
    /// Trading window bounds as "HH:MM", inclusive on both ends.
    pub window_start: String,
    pub window_end: String,
}

impl SignalConfig {
    pub fn window_start(&self) -> NaiveTime {
        parse_time("window_start", &self.window_start)
    }

    pub fn window_end(&self) -> NaiveTime {
        parse_time("window_end", &self.window_end)
    }
}

impl StrategyFileConfig {
    /// Load from a TOML file. Exits process on error.
    pub fn load(path: &str) -> Self {
        let content = std::fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("Failed to read strategy config at '{path}': {e}"));
        let cfg: Self = toml::from_str(&content)
            .unwrap_or_else(|e| panic!("Failed to parse strategy config at '{path}': {e}"));
        // Validate the window up front so a bad file fails at startup.
        let _ = cfg.signal.window_start();
        let _ = cfg.signal.window_end();
        cfg
    }
}

fn parse_time(field: &str, value: &str) -> NaiveTime {
    NaiveTime::parse_from_str(value, "%H:%M")
        .unwrap_or_else(|_| panic!("Strategy config field '{field}' must be HH:MM, got: '{value}'"))
}
