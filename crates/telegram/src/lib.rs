use bot_api::{get_updates, send_message};

mod bot_api;
mod types;

pub use types::{Chat, Message, ParseMode, Update};

#[derive(Debug, thiserror::Error)]
pub enum TelegramError {
    #[error("failed to reach the telegram api: {0}")]
    Fetch(#[source] reqwest::Error),
    #[error("failed to decode the telegram response: {0}")]
    Deserialize(#[source] reqwest::Error),
    #[error("the telegram api rejected the request: {0}")]
    Api(String),
}

/// A bot-token-scoped Telegram Bot API client.
pub struct Bot {
    client: reqwest::Client,
    token: String,
}

impl Bot {
    pub fn new(token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            token,
        }
    }

    /// Long-polls `getUpdates`. Blocks up to `timeout_secs` server-side when
    /// no updates are pending. Pass the last seen `update_id + 1` as `offset`
    /// to acknowledge previous updates.
    pub async fn get_updates(
        &self,
        offset: Option<i64>,
        timeout_secs: u32,
    ) -> Result<Vec<Update>, TelegramError> {
        get_updates(&self.client, &self.token, offset, timeout_secs).await
    }

    pub async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        parse_mode: Option<ParseMode>,
    ) -> Result<(), TelegramError> {
        send_message(&self.client, &self.token, chat_id, text, parse_mode).await
    }
}
