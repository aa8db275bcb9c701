#[derive(Debug)]
pub struct Word {
    pub word: String,
    pub phonetics: Vec<Phonetic>,
    pub meanings: Vec<WordMeaning>,
    pub source_urls: Vec<String>,
}

/// A pronunciation entry that matched one of the dialect buckets.
/// Entries whose audio URL matches no bucket never make it into a `Word`.
#[derive(Debug)]
pub struct Phonetic {
    pub dialect: Dialect,
    pub audio: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Uk,
    Us,
    Au,
}

impl Dialect {
    /// Buckets an audio URL by case-insensitive substring match.
    /// "uk" wins over "us" wins over "au" when several tokens appear.
    pub fn classify(audio: &str) -> Option<Dialect> {
        let audio = audio.to_lowercase();
        if audio.contains("uk") {
            Some(Dialect::Uk)
        } else if audio.contains("us") {
            Some(Dialect::Us)
        } else if audio.contains("au") {
            Some(Dialect::Au)
        } else {
            None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Dialect::Uk => "UK",
            Dialect::Us => "US",
            Dialect::Au => "AU",
        }
    }
}

#[derive(Debug)]
pub struct WordMeaning {
    pub part_of_speech: String,
    pub definitions: Vec<String>,
}
