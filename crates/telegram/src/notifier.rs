use teloxide::prelude::*;
use teloxide::types::ChatId;
use tracing::warn;

use common::{GapKind, TradeProposal};

use crate::tracker::SignalOutcome;

/// Sends signal, outcome, and summary messages to the configured chats.
pub struct TelegramNotifier {
    bot: Bot,
    chat_ids: Vec<ChatId>,
}

impl TelegramNotifier {
    pub fn new(token: impl Into<String>, chat_ids: &[i64]) -> Self {
        Self {
            bot: Bot::new(token.into()),
            chat_ids: chat_ids.iter().map(|&id| ChatId(id)).collect(),
        }
    }

    /// Publish a freshly derived trade proposal. Invoked at most once per
    /// evaluation cycle.
    pub async fn publish(&self, proposal: &TradeProposal) {
        let arrow = match proposal.direction {
            GapKind::Bullish => "📈",
            GapKind::Bearish => "📉",
        };
        let text = format!(
            "{arrow} FVG signal: {}\n\
             Entry: {:.2}\n\
             Stop-loss: {:.2}\n\
             Take-profit: {:.2}\n\
             Time: {}",
            proposal.direction,
            proposal.entry,
            proposal.stop_loss,
            proposal.take_profit,
            proposal.time.format("%Y-%m-%d %H:%M"),
        );
        self.send_text(&text).await;
    }

    /// Announce a resolved signal.
    pub async fn report_outcome(&self, outcome: &SignalOutcome) {
        let text = match outcome {
            SignalOutcome::TakeProfit { price, .. } => {
                format!("✅ Take-profit reached at {price:.2}.")
            }
            SignalOutcome::StopLoss { price, .. } => {
                format!("⚠️ Stop-loss hit at {price:.2}.")
            }
        };
        self.send_text(&text).await;
    }

    /// Send a plain message to all configured chats.
    /// Failures are logged, never propagated.
    pub async fn send_text(&self, message: &str) {
        for &chat_id in &self.chat_ids {
            if let Err(e) = self.bot.send_message(chat_id, message).await {
                warn!(chat_id = ?chat_id, error = %e, "Failed to send Telegram message");
            }
        }
    }
}
