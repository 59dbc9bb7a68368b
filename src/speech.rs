//! Spoken words via the Web Speech API

use wasm_bindgen::JsCast;
use web_sys::{SpeechSynthesis, SpeechSynthesisUtterance, SpeechSynthesisVoice};

use crate::settings::{SpeechSettings, VoiceInfo};

/// Speech synthesizer wrapper
pub struct Speaker {
    synth: Option<SpeechSynthesis>,
    voices: Vec<SpeechSynthesisVoice>,
    pub settings: SpeechSettings,
}

impl Speaker {
    pub fn new(settings: SpeechSettings) -> Self {
        let synth = web_sys::window().and_then(|w| w.speech_synthesis().ok());
        if synth.is_none() {
            log::warn!("Speech synthesis unavailable - words will not be spoken");
        }
        let mut speaker = Self {
            synth,
            voices: Vec::new(),
            settings,
        };
        speaker.refresh_voices();
        speaker
    }

    /// Re-read the installed voices (call on `voiceschanged`)
    pub fn refresh_voices(&mut self) {
        let Some(synth) = &self.synth else { return };
        self.voices = synth
            .get_voices()
            .iter()
            .filter_map(|v| v.dyn_into::<SpeechSynthesisVoice>().ok())
            .collect();
        log::info!("{} voices detected", self.voices.len());
    }

    /// Installed voices, in browser order
    pub fn voices(&self) -> Vec<VoiceInfo> {
        self.voices
            .iter()
            .map(|v| VoiceInfo {
                name: v.name(),
                uri: v.voice_uri(),
                lang: v.lang(),
            })
            .collect()
    }

    /// Voice that `speak` will use
    pub fn selected_voice(&self) -> Option<VoiceInfo> {
        let voices = self.voices();
        self.settings.resolve_voice(&voices).cloned()
    }

    /// Callback slot for voice list changes
    pub fn set_on_voices_changed(&self, callback: Option<&js_sys::Function>) {
        if let Some(synth) = &self.synth {
            synth.set_onvoiceschanged(callback);
        }
    }

    /// Speak `text`, cutting off anything still playing
    pub fn speak(&self, text: &str) {
        if text.is_empty() {
            return;
        }
        let Some(synth) = &self.synth else { return };
        synth.cancel();

        let utterance = match SpeechSynthesisUtterance::new_with_text(text) {
            Ok(u) => u,
            Err(e) => {
                log::warn!("Failed to create utterance: {:?}", e);
                return;
            }
        };
        if let Some(info) = self.selected_voice() {
            let voice = self.voices.iter().find(|v| v.voice_uri() == info.uri);
            utterance.set_voice(voice);
        }
        utterance.set_rate(self.settings.rate);
        utterance.set_pitch(self.settings.pitch);
        synth.speak(&utterance);
    }
}
