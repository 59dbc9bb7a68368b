//! Speech preferences
//!
//! Persisted separately from the word list, one key per preference.

use crate::consts::{RATE_KEY, VOICE_KEY};
use crate::persistence::BlobStore;

/// Slowest speaking rate offered
pub const MIN_RATE: f32 = 0.5;
/// Fastest speaking rate offered
pub const MAX_RATE: f32 = 2.0;
/// Rate slider step
pub const RATE_STEP: f32 = 0.1;
/// Pitch used for every utterance
pub const DEFAULT_PITCH: f32 = 1.0;

/// A synthesizer voice as reported by the browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceInfo {
    pub name: String,
    pub uri: String,
    pub lang: String,
}

/// Speech preferences
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechSettings {
    /// Preferred voice URI, `None` for automatic
    pub voice_uri: Option<String>,
    /// Speaking rate (1.0 = normal)
    pub rate: f32,
    pub pitch: f32,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            voice_uri: None,
            rate: 1.0,
            pitch: DEFAULT_PITCH,
        }
    }
}

impl SpeechSettings {
    /// Load from storage, falling back to defaults per key
    pub fn load(storage: &impl BlobStore) -> Self {
        let mut settings = Self::default();
        settings.voice_uri = storage.load(VOICE_KEY).filter(|uri| !uri.is_empty());
        if let Some(raw) = storage.load(RATE_KEY) {
            match raw.trim().parse::<f32>() {
                Ok(rate) if rate.is_finite() => settings.rate = clamp_rate(rate),
                _ => log::warn!("Ignoring saved speech rate '{}'", raw),
            }
        }
        log::info!(
            "Speech settings: voice={:?} rate={:.1}",
            settings.voice_uri,
            settings.rate
        );
        settings
    }

    /// Change the preferred voice (`None` clears it)
    pub fn set_voice(&mut self, storage: &mut impl BlobStore, uri: Option<String>) {
        let result = match &uri {
            Some(uri) => storage.save(VOICE_KEY, uri),
            None => storage.remove(VOICE_KEY),
        };
        if let Err(e) = result {
            log::warn!("Failed to save voice preference: {}", e);
        }
        self.voice_uri = uri;
    }

    /// Change the speaking rate (clamped to the offered range)
    pub fn set_rate(&mut self, storage: &mut impl BlobStore, rate: f32) {
        self.rate = if rate.is_finite() { clamp_rate(rate) } else { 1.0 };
        if let Err(e) = storage.save(RATE_KEY, &self.rate.to_string()) {
            log::warn!("Failed to save speech rate: {}", e);
        }
    }

    /// Resolve the voice to speak with from what the browser offers
    ///
    /// Preference order: saved voice, first en-US voice, first voice.
    pub fn resolve_voice<'a>(&self, voices: &'a [VoiceInfo]) -> Option<&'a VoiceInfo> {
        self.voice_uri
            .as_deref()
            .and_then(|uri| voices.iter().find(|v| v.uri == uri))
            .or_else(|| voices.iter().find(|v| v.lang.starts_with("en-US")))
            .or_else(|| voices.first())
    }
}

fn clamp_rate(rate: f32) -> f32 {
    rate.clamp(MIN_RATE, MAX_RATE)
}
