//! The boundary to the platform's speech-capture capability

use std::error::Error;

use async_trait::async_trait;

/// A start/stop speech-recognition capability.
///
/// One invocation yields at most one final transcript. `Ok(None)` means the
/// session ended without a usable result (silence, dismissal), which callers
/// treat like any other "no result" outcome. This crate ships no platform
/// implementation; embedding applications provide one.
#[async_trait]
pub trait SpeechSource {
    /// Capture one utterance and return its final transcript.
    ///
    /// `language_hint` biases recognition (e.g. `"zh-CN"`, `"en-US"`, see
    /// [`Language::speech_hint`](crate::i18n::Language::speech_hint)).
    async fn capture(&self, language_hint: &str) -> Result<Option<String>, Box<dyn Error>>;
}
