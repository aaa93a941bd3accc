use async_trait::async_trait;

use super::super::domain::{RecognitionSettings, Utterance};
use super::super::ports::{SpeechError, SpeechRecognizer, SpeechSynthesizer};

/// 平台不具备语音合成能力时使用
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableSynthesizer;

#[async_trait]
impl SpeechSynthesizer for UnavailableSynthesizer {
    fn is_available(&self) -> bool {
        false
    }

    async fn speak(&self, _utterance: &Utterance) -> Result<(), SpeechError> {
        Err(SpeechError::Unavailable("speech synthesis".to_string()))
    }
}

/// 平台不具备语音识别能力时使用
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableRecognizer;

#[async_trait]
impl SpeechRecognizer for UnavailableRecognizer {
    fn is_available(&self) -> bool {
        false
    }

    async fn recognize(
        &self,
        _settings: &RecognitionSettings,
    ) -> Result<Option<String>, SpeechError> {
        Err(SpeechError::Unavailable("speech recognition".to_string()))
    }
}
