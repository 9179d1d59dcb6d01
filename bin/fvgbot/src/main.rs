use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use common::{Config, MarketDataSource};
use marketdata::YahooClient;
use strategy::{SignalConfig, SignalEvaluator, StrategyFileConfig};
use telegram_notify::{DailyReport, ResultTracker, TelegramNotifier};

#[tokio::main]
async fn main() {
    // ── Logging ──────────────────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .init();

    // ── Config ────────────────────────────────────────────────────────────────
    let cfg = Config::from_env();
    let strategy_file = StrategyFileConfig::load(&cfg.strategy_config_path);
    let signal_cfg = strategy_file.signal.clone();
    info!(
        symbol = %signal_cfg.symbol,
        interval = %signal_cfg.interval,
        poll_secs = cfg.poll_secs,
        "FvgBot starting"
    );

    // ── Collaborators ─────────────────────────────────────────────────────────
    let source: Arc<dyn MarketDataSource> = Arc::new(YahooClient::new());
    let evaluator = SignalEvaluator::from_config(&signal_cfg);
    let notifier = TelegramNotifier::new(cfg.telegram_token.clone(), &cfg.telegram_chat_ids);
    let mut tracker = ResultTracker::new();
    let mut report = DailyReport::new(cfg.summary_time);

    // ── Evaluation loop ───────────────────────────────────────────────────────
    let mut ticker = tokio::time::interval(Duration::from_secs(cfg.poll_secs));
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                run_cycle(
                    source.as_ref(),
                    &signal_cfg,
                    &evaluator,
                    &notifier,
                    &mut tracker,
                    &mut report,
                )
                .await;
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received. Exiting.");
                break;
            }
        }
    }
}

/// One evaluation cycle: fetch candles, evaluate, publish a proposal if one
/// was derived, settle the tracked signal against the latest close, and send
/// the daily summary when due.
async fn run_cycle(
    source: &dyn MarketDataSource,
    signal_cfg: &SignalConfig,
    evaluator: &SignalEvaluator,
    notifier: &TelegramNotifier,
    tracker: &mut ResultTracker,
    report: &mut DailyReport,
) {
    let candles = match source.fetch(&signal_cfg.symbol, &signal_cfg.interval).await {
        Ok(c) => c,
        Err(e) => {
            warn!(symbol = %signal_cfg.symbol, error = %e, "Failed to fetch candles — skipping cycle");
            return;
        }
    };
    let Some(last) = candles.last() else {
        warn!(symbol = %signal_cfg.symbol, "Empty candle series — skipping cycle");
        return;
    };
    let latest_close = last.close;

    match evaluator.evaluate(&candles) {
        Some(proposal) => {
            info!(
                direction = %proposal.direction,
                entry = proposal.entry,
                stop_loss = proposal.stop_loss,
                take_profit = proposal.take_profit,
                "Gap signal detected"
            );
            notifier.publish(&proposal).await;
            tracker.track(proposal);
        }
        None => debug!("No gap in the trading window"),
    }

    if let Some(outcome) = tracker.update(latest_close) {
        notifier.report_outcome(&outcome).await;
    }

    if let Some(summary) =
        report.maybe_compose(Local::now().naive_local(), tracker.wins(), tracker.losses())
    {
        notifier.send_text(&summary).await;
    }
}
