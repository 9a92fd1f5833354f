use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::notifier::Notifier;

const PARSE_MODE: &str = "HTML";

/// Envelope returned by every Bot API method.
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    pub ok: bool,
    #[serde(default)]
    pub error_code: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Telegram Bot API sender bound to a single bot token.
///
/// Built with [`TelegramService::connect`], which checks the token against
/// `getMe` before any receiver is registered. Messages go out as
/// `title\nbody` in HTML parse mode, one `sendMessage` call per chat id.
pub struct TelegramService {
    client: reqwest::Client,
    api_url: String,
    token: String,
    chat_ids: Vec<i64>,
}

impl TelegramService {
    pub async fn connect(client: reqwest::Client, api_url: &str, token: &str) -> Result<Self> {
        if token.is_empty() {
            return Err(Error::InvalidToken("token is empty".to_string()));
        }

        let service = Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            chat_ids: Vec::new(),
        };

        debug!(api_url = %service.api_url, "Checking telegram bot token");
        let response = service
            .client
            .get(service.method_url("getMe"))
            .send()
            .await
            .map_err(|e| Error::Http(e.without_url()))?;

        if let Some(reason) = api_failure(response).await {
            return Err(Error::InvalidToken(reason));
        }

        Ok(service)
    }

    pub fn receivers(&self) -> &[i64] {
        &self.chat_ids
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_url, self.token, method)
    }

    async fn send_to(&self, chat_id: i64, text: &str) -> Result<()> {
        let chat_id_param = chat_id.to_string();
        let params = [
            ("chat_id", chat_id_param.as_str()),
            ("text", text),
            ("parse_mode", PARSE_MODE),
        ];

        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .form(&params)
            .send()
            .await
            .map_err(|e| Error::Http(e.without_url()))?;

        match api_failure(response).await {
            Some(reason) => Err(Error::Delivery { chat_id, reason }),
            None => {
                debug!(chat_id, "Telegram message delivered");
                Ok(())
            }
        }
    }
}

#[async_trait]
impl Notifier for TelegramService {
    fn add_receivers(&mut self, chat_ids: &[i64]) {
        self.chat_ids.extend_from_slice(chat_ids);
    }

    async fn send(&self, title: &str, body: &str) -> Result<()> {
        let text = format!("{}\n{}", title, body);
        for &chat_id in &self.chat_ids {
            self.send_to(chat_id, &text).await?;
        }
        Ok(())
    }
}

/// Returns the reason a Bot API call failed, or `None` when it succeeded.
async fn api_failure(response: reqwest::Response) -> Option<String> {
    let status = response.status();
    match response.json::<ApiResponse>().await {
        Ok(body) if status.is_success() && body.ok => None,
        Ok(body) => Some(match (body.error_code, body.description) {
            (Some(code), Some(description)) => format!("{} {}", code, description),
            (None, Some(description)) => description,
            _ => format!("HTTP {}", status),
        }),
        Err(_) if !status.is_success() => Some(format!("HTTP {}", status)),
        Err(e) => Some(format!("unexpected response: {}", e.without_url())),
    }
}
