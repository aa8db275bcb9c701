use std::sync::Arc;
use std::time::Duration;

use config::Config;
use dictionary::{Dictionary, DictionaryError};
use telegram::{Bot, Message, ParseMode};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod format;

const POLL_TIMEOUT_SECS: u32 = 30;
const POLL_RETRY_DELAY: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let bot = Arc::new(Bot::new(config.bot_token));
    let dict = Arc::new(Dictionary::new());

    info!("polling for updates");
    let mut offset = None;
    loop {
        let updates = match bot.get_updates(offset, POLL_TIMEOUT_SECS).await {
            Ok(updates) => updates,
            Err(error) => {
                warn!("failed to fetch updates: {error}");
                tokio::time::sleep(POLL_RETRY_DELAY).await;
                continue;
            }
        };
        for update in updates {
            offset = Some(update.update_id + 1);
            let Some(message) = update.message else {
                continue;
            };
            let bot = Arc::clone(&bot);
            let dict = Arc::clone(&dict);
            // one task per message so a slow lookup can't hold up the queue
            tokio::spawn(async move {
                if let Err(error) = handle_message(&bot, &dict, message).await {
                    warn!("failed to handle a message: {error}");
                }
            });
        }
    }
}

async fn handle_message(bot: &Bot, dict: &Dictionary, message: Message) -> anyhow::Result<()> {
    let Some(text) = message.text else {
        return Ok(());
    };
    if is_command(&text) {
        if command_name(&text) == "start" {
            bot.send_message(message.chat.id, format::GREETING, None)
                .await?;
        }
        return Ok(());
    }
    define_word(bot, dict, message.chat.id, &text).await
}

/// Looks the message text up verbatim and replies with either the formatted
/// definition or the fixed apology. Lookup failures are logged here and go no
/// further; the user always gets a reply.
async fn define_word(bot: &Bot, dict: &Dictionary, chat_id: i64, word: &str) -> anyhow::Result<()> {
    info!("word received: {word}");
    let result = dict.get_definition(word).await;
    if let Err(error) = &result {
        match error {
            DictionaryError::NotFound(_) => {
                debug!("no definition for '{word}': {error}");
            }
            other => {
                warn!("lookup for '{word}' failed: {other}");
            }
        }
    }
    let reply = format::definition_reply(result);
    let parse_mode = reply.markdown.then_some(ParseMode::Markdown);
    bot.send_message(chat_id, &reply.text, parse_mode).await?;
    Ok(())
}

fn is_command(text: &str) -> bool {
    text.starts_with('/')
}

/// Extracts the bare command name: "/start@somebot arg" -> "start".
fn command_name(text: &str) -> &str {
    text.trim_start_matches('/')
        .split(|c: char| c == '@' || c.is_whitespace())
        .next()
        .unwrap_or("")
}
