use async_trait::async_trait;

use crate::error::Result;

/// Something that can deliver a titled message to a set of numeric receivers.
///
/// The command handler only talks to this trait, so it can be driven by the
/// real Telegram service or by a fake in tests.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Registers chat ids that will receive the next `send`, in order.
    fn add_receivers(&mut self, chat_ids: &[i64]);

    /// Delivers `title` and `body` to every registered receiver.
    async fn send(&self, title: &str, body: &str) -> Result<()>;
}
