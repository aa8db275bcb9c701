use serde::Deserialize;

use crate::dictionary::{Dialect, Phonetic, Word, WordMeaning};
use crate::{DictionaryError, NotFoundError};

const DICTIONARY_API_URL: &'static str = "https://api.dictionaryapi.dev/api/v2/entries/en";

pub(crate) async fn get_definition(
    client: &reqwest::Client,
    word: &str,
) -> Result<Word, DictionaryError> {
    let res = client
        .get(format!("{DICTIONARY_API_URL}/{word}"))
        .send()
        .await
        .map_err(DictionaryError::Fetch)?;
    if !res.status().is_success() {
        // the service answers misses with {"title", "message", "resolution"}
        let message = res
            .json::<NotFoundResponse>()
            .await
            .map(|body| body.message)
            .unwrap_or_else(|_| String::from("no definition available"));
        return Err(DictionaryError::NotFound(NotFoundError::new(message)));
    }
    let mut entries = res
        .json::<Vec<WordResponse>>()
        .await
        .map_err(DictionaryError::Deserialize)?;
    if entries.is_empty() {
        return Err(DictionaryError::EmptyResponse);
    }
    Ok(entries.swap_remove(0).into())
}

#[derive(Deserialize)]
struct WordResponse {
    word: String,
    #[serde(default)]
    phonetics: Vec<PhoneticResponse>,
    #[serde(default)]
    meanings: Vec<MeaningResponse>,
    #[serde(default, rename = "sourceUrls")]
    source_urls: Vec<String>,
}

#[derive(Deserialize)]
struct PhoneticResponse {
    #[serde(default)]
    audio: String,
}

#[derive(Deserialize)]
struct MeaningResponse {
    #[serde(rename = "partOfSpeech")]
    part_of_speech: String,
    #[serde(default)]
    definitions: Vec<DefinitionResponse>,
}

#[derive(Deserialize)]
struct DefinitionResponse {
    definition: String,
}

#[derive(Deserialize)]
struct NotFoundResponse {
    message: String,
}

impl From<WordResponse> for Word {
    fn from(response: WordResponse) -> Self {
        let phonetics = response
            .phonetics
            .into_iter()
            .filter_map(|phonetic| {
                Dialect::classify(&phonetic.audio).map(|dialect| Phonetic {
                    dialect,
                    audio: phonetic.audio,
                })
            })
            .collect();
        let meanings = response
            .meanings
            .into_iter()
            .map(|meaning| WordMeaning {
                part_of_speech: meaning.part_of_speech,
                definitions: meaning
                    .definitions
                    .into_iter()
                    .map(|definition| definition.definition)
                    .collect(),
            })
            .collect();
        Self {
            word: response.word,
            phonetics,
            meanings,
            source_urls: response.source_urls,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO_ENTRY: &str = r#"{
        "word": "hello",
        "phonetic": "həˈləʊ",
        "phonetics": [
            {"text": "həˈləʊ", "audio": "https://media.example/hello-uk.mp3"},
            {"text": "hɛˈləʊ", "audio": "https://media.example/hello-US.mp3"},
            {"text": "hæˈləʊ", "audio": "https://media.example/hello-play.mp3"},
            {"text": "həˈloʊ"}
        ],
        "meanings": [
            {
                "partOfSpeech": "noun",
                "definitions": [{"definition": "a greeting", "synonyms": [], "antonyms": []}],
                "synonyms": [],
                "antonyms": []
            }
        ],
        "sourceUrls": ["https://en.wiktionary.org/wiki/hello"]
    }"#;

    #[test]
    fn converts_an_entry_and_drops_unclassified_audio() {
        let response: WordResponse = serde_json::from_str(HELLO_ENTRY).unwrap();
        let word = Word::from(response);
        assert_eq!(word.word, "hello");
        // the "play" url and the audio-less entry are gone
        assert_eq!(word.phonetics.len(), 2);
        assert_eq!(word.phonetics[0].dialect, Dialect::Uk);
        assert_eq!(word.phonetics[1].dialect, Dialect::Us);
        assert_eq!(word.phonetics[1].audio, "https://media.example/hello-US.mp3");
        assert_eq!(word.meanings.len(), 1);
        assert_eq!(word.meanings[0].part_of_speech, "noun");
        assert_eq!(word.meanings[0].definitions, vec!["a greeting"]);
        assert_eq!(word.source_urls, vec!["https://en.wiktionary.org/wiki/hello"]);
    }

    #[test]
    fn missing_optional_fields_default_to_empty() {
        let response: WordResponse = serde_json::from_str(r#"{"word": "terse"}"#).unwrap();
        let word = Word::from(response);
        assert_eq!(word.word, "terse");
        assert!(word.phonetics.is_empty());
        assert!(word.meanings.is_empty());
        assert!(word.source_urls.is_empty());
    }

    #[test]
    fn not_found_body_parses() {
        let body = r#"{
            "title": "No Definitions Found",
            "message": "Sorry pal, we couldn't find definitions for the word you were looking for.",
            "resolution": "You can try the search again at later time or head to the web instead."
        }"#;
        let response: NotFoundResponse = serde_json::from_str(body).unwrap();
        assert!(response.message.starts_with("Sorry pal"));
    }
}
