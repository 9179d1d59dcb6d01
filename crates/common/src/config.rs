use chrono::NaiveTime;

/// All configuration loaded from environment variables at startup.
/// Missing required variables cause an immediate panic with a clear message.
#[derive(Debug, Clone)]
pub struct Config {
    // Telegram
    pub telegram_token: String,
    pub telegram_chat_ids: Vec<i64>,

    // Scheduling
    /// Seconds between evaluation cycles.
    pub poll_secs: u64,
    /// Local wall-clock time at/after which the daily summary is sent.
    pub summary_time: NaiveTime,

    // Strategy config file path
    pub strategy_config_path: String,
}

impl Config {
    /// Load all configuration from environment variables.
    /// Loads `.env` if present. Panics on any missing required variable.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // ignore error if .env not present

        let telegram_chat_ids = required_env("TELEGRAM_CHAT_IDS")
            .split(',')
            .map(|s| {
                s.trim().parse::<i64>().unwrap_or_else(|_| {
                    panic!("TELEGRAM_CHAT_IDS contains non-numeric ID: '{}'", s.trim())
                })
            })
            .collect();

        let summary_time = optional_env("SUMMARY_TIME")
            .map(|v| {
                NaiveTime::parse_from_str(&v, "%H:%M").unwrap_or_else(|_| {
                    panic!("SUMMARY_TIME must be HH:MM, got: '{v}'")
                })
            })
            .unwrap_or_else(|| NaiveTime::from_hms_opt(17, 0, 0).unwrap());

        Config {
            telegram_token: required_env("TELEGRAM_TOKEN"),
            telegram_chat_ids,
            poll_secs: optional_env("POLL_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            summary_time,
            strategy_config_path: optional_env("STRATEGY_CONFIG_PATH")
                .unwrap_or_else(|| "config/fvgbot.toml".to_string()),
        }
    }
}

fn required_env(key: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| {
        panic!("Required environment variable '{key}' is not set. Check your .env file.")
    })
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
