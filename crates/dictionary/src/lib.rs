use dictionary_api::get_definition;

mod dictionary;
mod dictionary_api;

pub use dictionary::{Dialect, Phonetic, Word, WordMeaning};

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to reach the dictionary service: {0}")]
    Fetch(#[source] reqwest::Error),
    #[error("failed to decode the dictionary response: {0}")]
    Deserialize(#[source] reqwest::Error),
    #[error("no definition found: {0}")]
    NotFound(NotFoundError),
    #[error("the dictionary service returned an empty entry list")]
    EmptyResponse,
}

/// The message the service attaches to a non-success response.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct NotFoundError {
    message: String,
}

impl NotFoundError {
    pub fn new(message: String) -> Self {
        Self { message }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub struct Dictionary {
    client: reqwest::Client,
}

impl Dictionary {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub async fn get_definition(&self, word: &str) -> Result<Word, DictionaryError> {
        get_definition(&self.client, word).await
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}
