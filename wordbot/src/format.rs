use dictionary::{Dialect, DictionaryError, Word};

pub const GREETING: &str = "Hi! I can define words for you.";
pub const NOT_FOUND_MESSAGE: &str = "Sorry, I could not find a definition for that word.";

/// Outbound message text plus whether the client should interpret Markdown.
pub struct Reply {
    pub text: String,
    pub markdown: bool,
}

/// Turns a lookup outcome into the reply to send back. Every failure kind
/// reads the same to the user; only the formatted definition needs Markdown.
pub fn definition_reply(result: Result<Word, DictionaryError>) -> Reply {
    match result {
        Ok(word) => Reply {
            text: format_definition(&word),
            markdown: true,
        },
        Err(_) => Reply {
            text: NOT_FOUND_MESSAGE.to_string(),
            markdown: false,
        },
    }
}

/// Renders a definition as a Markdown message: a bold-labeled section each
/// for the word, its phonetics grouped UK then US then AU, its meanings, and
/// the source URLs.
pub fn format_definition(word: &Word) -> String {
    let phonetics = [Dialect::Uk, Dialect::Us, Dialect::Au]
        .into_iter()
        .flat_map(|dialect| {
            word.phonetics
                .iter()
                .filter(move |phonetic| phonetic.dialect == dialect)
                .map(move |phonetic| format!("{}: {}", dialect.label(), phonetic.audio))
        })
        .collect::<Vec<String>>()
        .join("\n");

    let meanings = word
        .meanings
        .iter()
        .map(|meaning| {
            format!(
                "Part of Speech: {}\nDefinitions:\n{}",
                meaning.part_of_speech,
                meaning.definitions.join(", ")
            )
        })
        .collect::<Vec<String>>()
        .join("\n\n");

    let source_urls = word.source_urls.join("\n");

    format!(
        "*Word:* {}\n\n*Phonetics:*\n{}\n\n*Meanings:*\n{}\n\n*Source URLs:*\n{}",
        word.word, phonetics, meanings, source_urls
    )
}
