use anyhow::Context;

pub struct Config {
    pub bot_token: String,
}

impl Config {
    /// Loads the bot credentials. Failing here is fatal: the process must not
    /// start polling without a token.
    pub fn from_env() -> anyhow::Result<Self> {
        let bot_token = std::env::var("BOT_TOKEN")
            .context("the BOT_TOKEN environment variable is not set")?;
        Ok(Self { bot_token })
    }
}
