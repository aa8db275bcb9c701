use serde::{Deserialize, Serialize};

use crate::types::{Message, ParseMode, Update};
use crate::TelegramError;

const TELEGRAM_API_URL: &'static str = "https://api.telegram.org";

/// Common `{ok, result, description}` envelope around every Bot API reply.
#[derive(Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

impl<T> ApiResponse<T> {
    fn into_result(self) -> Result<T, TelegramError> {
        if self.ok {
            if let Some(result) = self.result {
                return Ok(result);
            }
        }
        Err(TelegramError::Api(
            self.description
                .unwrap_or_else(|| String::from("no description provided")),
        ))
    }
}

#[derive(Serialize)]
struct GetUpdatesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    offset: Option<i64>,
    timeout: u32,
}

pub(crate) async fn get_updates(
    client: &reqwest::Client,
    token: &str,
    offset: Option<i64>,
    timeout_secs: u32,
) -> Result<Vec<Update>, TelegramError> {
    let res = client
        .post(format!("{TELEGRAM_API_URL}/bot{token}/getUpdates"))
        .json(&GetUpdatesRequest {
            offset,
            timeout: timeout_secs,
        })
        .send()
        .await
        .map_err(TelegramError::Fetch)?;
    res.json::<ApiResponse<Vec<Update>>>()
        .await
        .map_err(TelegramError::Deserialize)?
        .into_result()
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: i64,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parse_mode: Option<ParseMode>,
}

pub(crate) async fn send_message(
    client: &reqwest::Client,
    token: &str,
    chat_id: i64,
    text: &str,
    parse_mode: Option<ParseMode>,
) -> Result<(), TelegramError> {
    let res = client
        .post(format!("{TELEGRAM_API_URL}/bot{token}/sendMessage"))
        .json(&SendMessageRequest {
            chat_id,
            text,
            parse_mode,
        })
        .send()
        .await
        .map_err(TelegramError::Fetch)?;
    res.json::<ApiResponse<Message>>()
        .await
        .map_err(TelegramError::Deserialize)?
        .into_result()
        .map(|_| ())
}
