use std::future::Future;

use tracing::{info, warn};

use crate::config::TelegramArgs;
use crate::error::{Error, Result};
use crate::notifier::Notifier;
use crate::telegram::TelegramService;

/// One notification, built from the command line and consumed by a single send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendRequest {
    pub token: String,
    pub channels: Vec<String>,
    pub message: String,
    pub title: String,
}

impl SendRequest {
    pub fn from_args(args: &TelegramArgs) -> Self {
        Self {
            token: args.token.clone(),
            channels: args.channel.split(',').map(str::to_string).collect(),
            message: args.msg.clone(),
            title: args.title(),
        }
    }

    /// Chat ids in input order.
    ///
    /// An empty segment fails the whole request. A segment that is not an
    /// integer is logged and skipped.
    pub fn chat_ids(&self) -> Result<Vec<i64>> {
        let mut ids = Vec::with_capacity(self.channels.len());
        for channel in &self.channels {
            if channel.is_empty() {
                return Err(Error::EmptyChannel);
            }
            match channel.parse::<i64>() {
                Ok(id) => ids.push(id),
                Err(e) => warn!(channel = %channel, error = %e, "Skipping channel id that is not an integer"),
            }
        }

        if ids.is_empty() {
            return Err(Error::NoValidChannels(self.channels.join(",")));
        }
        Ok(ids)
    }
}

/// Validates the request, builds a notifier with `connect`, registers the
/// chat ids and sends once. `connect` is not called when validation fails.
pub async fn execute<N, F, Fut>(request: &SendRequest, connect: F) -> Result<()>
where
    N: Notifier,
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<N>>,
{
    let chat_ids = request.chat_ids()?;

    let mut notifier = connect(request.token.clone()).await?;
    notifier.add_receivers(&chat_ids);
    notifier.send(&request.title, &request.message).await?;

    info!(receivers = chat_ids.len(), "Successfully sent!");
    Ok(())
}

pub async fn run(args: TelegramArgs) -> Result<()> {
    let request = SendRequest::from_args(&args);
    let client = reqwest::Client::new();
    let api_url = args.api_url;

    execute(&request, |token| async move {
        TelegramService::connect(client, &api_url, &token).await
    })
    .await
}
