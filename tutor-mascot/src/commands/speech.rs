// Speech Commands

use crate::infrastructure::AppState;
use crate::modules::speech::CaptureOutcome;

/// 识别一段语音，成功时把识别结果放进待发送输入
pub async fn speech_capture(state: &AppState) -> CaptureOutcome {
    let outcome = state.speech.input().start_capture().await;

    match &outcome {
        CaptureOutcome::Transcript(text) => {
            state.chat.set_pending_input(text.clone()).await;
        }
        CaptureOutcome::Unsupported => {
            tracing::warn!("[speech_capture] Speech recognition is not supported here");
        }
        CaptureOutcome::AlreadyActive => {
            tracing::debug!("[speech_capture] Capture already in progress");
        }
        CaptureOutcome::Failed(reason) => {
            tracing::warn!("[speech_capture] Capture failed: {}", reason);
        }
        CaptureOutcome::Ended => {}
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::commands::chat_snapshot;
    use crate::modules::chat::MockQueryAdapter;
    use crate::modules::config::AppConfig;
    use crate::modules::speech::{
        RecognitionSettings, ScriptedRecognizer, ScriptedSynthesizer, SpeechModule,
        UnavailableRecognizer, UnavailableSynthesizer,
    };

    #[tokio::test]
    async fn test_transcript_replaces_pending_input() {
        let recognizer = Arc::new(ScriptedRecognizer::new());
        recognizer.push_transcript("what about triangles");
        let state = AppState::with_ports(
            AppConfig::default(),
            Arc::new(MockQueryAdapter::new()),
            |events| {
                SpeechModule::with_adapters(
                    Arc::new(ScriptedSynthesizer::new()),
                    recognizer.clone(),
                    RecognitionSettings::default(),
                    events,
                )
            },
        );

        let outcome = speech_capture(&state).await;
        assert_eq!(outcome, CaptureOutcome::Transcript("what about triangles".to_string()));
        assert_eq!(chat_snapshot(&state).await.unwrap().pending_input, "what about triangles");
        assert!(!state.speech.input().is_recognizing());
    }

    #[tokio::test]
    async fn test_unsupported_leaves_input_alone() {
        let state = AppState::with_ports(
            AppConfig::default(),
            Arc::new(MockQueryAdapter::new()),
            |events| {
                SpeechModule::with_adapters(
                    Arc::new(UnavailableSynthesizer),
                    Arc::new(UnavailableRecognizer),
                    RecognitionSettings::default(),
                    events,
                )
            },
        );

        assert_eq!(speech_capture(&state).await, CaptureOutcome::Unsupported);
        assert!(!state.speech.input().is_recognizing());
        assert_eq!(
            chat_snapshot(&state).await.unwrap().pending_input,
            "Explain a^2 + b^2 = c^2"
        );
    }
}
