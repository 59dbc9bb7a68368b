//! Word definitions from dictionaryapi.dev
//!
//! Display only: nothing here feeds back into word selection.

use serde::Deserialize;
use thiserror::Error;

const API_BASE: &str = "https://api.dictionaryapi.dev/api/v2/entries/en/";

/// A definition ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub definition: String,
    pub part_of_speech: String,
    pub phonetic: Option<String>,
}

/// Why no definition could be shown
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Definition not found")]
    NotFound,
    #[error("Failed to fetch definition")]
    Http(u16),
    #[error("No definition found")]
    NoDefinition,
    #[error("Error connecting to dictionary service")]
    Network(String),
    #[error("Unreadable dictionary response")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct Entry {
    phonetic: Option<String>,
    #[serde(default)]
    phonetics: Vec<Phonetic>,
    #[serde(default)]
    meanings: Vec<Meaning>,
}

#[derive(Debug, Deserialize)]
struct Phonetic {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Meaning {
    #[serde(default)]
    part_of_speech: String,
    #[serde(default)]
    definitions: Vec<Sense>,
}

#[derive(Debug, Deserialize)]
struct Sense {
    definition: String,
}

/// Lookup URL for a word
pub fn entry_url(word: &str) -> String {
    format!("{}{}", API_BASE, urlencoding::encode(word))
}

/// Map a non-success HTTP status to an error
pub fn status_error(status: u16) -> LookupError {
    if status == 404 {
        LookupError::NotFound
    } else {
        LookupError::Http(status)
    }
}

/// Extract the first usable definition from a response body
pub fn parse_entries(body: &str) -> Result<Definition, LookupError> {
    let entries: Vec<Entry> = serde_json::from_str(body)?;
    let entry = entries.into_iter().next().ok_or(LookupError::NoDefinition)?;

    let phonetic = entry
        .phonetic
        .filter(|p| !p.is_empty())
        .or_else(|| entry.phonetics.into_iter().find_map(|p| p.text.filter(|t| !t.is_empty())));

    let meaning = entry
        .meanings
        .into_iter()
        .find(|m| !m.definitions.is_empty())
        .ok_or(LookupError::NoDefinition)?;
    let part_of_speech = meaning.part_of_speech;
    let sense = meaning
        .definitions
        .into_iter()
        .next()
        .ok_or(LookupError::NoDefinition)?;

    Ok(Definition {
        definition: sense.definition,
        part_of_speech,
        phonetic,
    })
}

/// Tracks the newest lookup so slower, older responses are dropped
#[derive(Debug, Default)]
pub struct LookupTracker {
    latest: u64,
}

impl LookupTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a lookup; the returned ticket identifies it
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Whether a ticket still belongs to the newest lookup
    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }

    /// Invalidate every outstanding lookup
    pub fn clear(&mut self) {
        self.latest += 1;
    }
}

/// Fetch a definition (WASM only)
#[cfg(target_arch = "wasm32")]
pub async fn fetch_definition(word: &str) -> Result<Definition, LookupError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let network = |e: wasm_bindgen::JsValue| LookupError::Network(format!("{:?}", e));

    let window = web_sys::window().ok_or_else(|| LookupError::Network("no window".to_string()))?;
    let resp = JsFuture::from(window.fetch_with_str(&entry_url(word)))
        .await
        .map_err(network)?;
    let resp: web_sys::Response = resp.dyn_into().map_err(network)?;
    if !resp.ok() {
        return Err(status_error(resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(network)?)
        .await
        .map_err(network)?;
    let body = text.as_string().unwrap_or_default();
    parse_entries(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_url_encodes() {
        assert_eq!(
            entry_url("hors d'oeuvres"),
            "https://api.dictionaryapi.dev/api/v2/entries/en/hors%20d%27oeuvres"
        );
        assert!(entry_url("señor").ends_with("/se%C3%B1or"));
    }

    #[test]
    fn test_status_errors() {
        assert!(matches!(status_error(404), LookupError::NotFound));
        assert!(matches!(status_error(500), LookupError::Http(500)));
        assert_eq!(status_error(404).to_string(), "Definition not found");
        assert_eq!(status_error(503).to_string(), "Failed to fetch definition");
    }

    #[test]
    fn test_parse_first_meaning_with_definitions() {
        let body = r#"[{
            "word": "heron",
            "phonetics": [{"audio": ""}, {"text": "/ˈhɛɹən/"}],
            "meanings": [
                {"partOfSpeech": "verb", "definitions": []},
                {"partOfSpeech": "noun", "definitions": [
                    {"definition": "A long-legged wading bird."},
                    {"definition": "Second sense."}
                ]}
            ]
        }]"#;
        let def = parse_entries(body).unwrap();
        assert_eq!(def.part_of_speech, "noun");
        assert_eq!(def.definition, "A long-legged wading bird.");
        assert_eq!(def.phonetic.as_deref(), Some("/ˈhɛɹən/"));
    }

    #[test]
    fn test_parse_prefers_entry_phonetic() {
        let body = r#"[{"phonetic": "/kæt/", "phonetics": [{"text": "/other/"}],
            "meanings": [{"partOfSpeech": "noun", "definitions": [{"definition": "A feline."}]}]}]"#;
        assert_eq!(parse_entries(body).unwrap().phonetic.as_deref(), Some("/kæt/"));
    }

    #[test]
    fn test_parse_without_definitions() {
        assert!(matches!(parse_entries("[]"), Err(LookupError::NoDefinition)));
        let body = r#"[{"meanings": [{"partOfSpeech": "noun", "definitions": []}]}]"#;
        assert!(matches!(parse_entries(body), Err(LookupError::NoDefinition)));
        assert!(matches!(parse_entries("<html>"), Err(LookupError::Malformed(_))));
    }

    #[test]
    fn test_tracker_drops_stale_lookups() {
        let mut tracker = LookupTracker::new();
        let first = tracker.begin();
        let second = tracker.begin();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));

        tracker.clear();
        assert!(!tracker.is_current(second));
    }
}
