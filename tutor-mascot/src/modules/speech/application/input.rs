use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::infrastructure::{AppEvent, EventBus};

use super::super::domain::{CaptureOutcome, RecognitionSettings};
use super::super::ports::SpeechRecognizer;

/// 识别状态守卫
///
/// 持有期间 recognizing 为 true，析构时恢复为 false
struct RecognizingGuard {
    recognizing: Arc<watch::Sender<bool>>,
}

impl Drop for RecognizingGuard {
    fn drop(&mut self) {
        self.recognizing.send_replace(false);
    }
}

/// 语音输入服务
///
/// 同一时间只允许一个识别会话；会话进行中再次调用 `start_capture`
/// 会被直接拒绝并返回 `CaptureOutcome::AlreadyActive`。
#[derive(Clone)]
pub struct SpeechInputService {
    recognizer: Arc<dyn SpeechRecognizer>,
    settings: RecognitionSettings,
    recognizing: Arc<watch::Sender<bool>>,
    events: EventBus,
}

impl SpeechInputService {
    pub fn new(
        recognizer: Arc<dyn SpeechRecognizer>,
        settings: RecognitionSettings,
        events: EventBus,
    ) -> Self {
        let (recognizing, _) = watch::channel(false);
        Self {
            recognizer,
            settings,
            recognizing: Arc::new(recognizing),
            events,
        }
    }

    pub fn is_supported(&self) -> bool {
        self.recognizer.is_available()
    }

    pub fn is_recognizing(&self) -> bool {
        *self.recognizing.borrow()
    }

    /// 订阅 recognizing 标志
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.recognizing.subscribe()
    }

    pub fn settings(&self) -> &RecognitionSettings {
        &self.settings
    }

    /// 开始一次识别会话，直到得到结果、结束或出错
    pub async fn start_capture(&self) -> CaptureOutcome {
        if !self.recognizer.is_available() {
            warn!("Speech recognition is not supported on this platform");
            return CaptureOutcome::Unsupported;
        }

        let claimed = self.recognizing.send_if_modified(|active| {
            if *active {
                false
            } else {
                *active = true;
                true
            }
        });

        if !claimed {
            debug!("Capture already active, ignoring start request");
            return CaptureOutcome::AlreadyActive;
        }

        let guard = RecognizingGuard {
            recognizing: self.recognizing.clone(),
        };
        self.events.publish(AppEvent::CaptureStarted);
        info!("Listening ({})", self.settings.locale);

        let recognizer = self.recognizer.clone();
        let settings = self.settings.clone();
        let job = tokio::spawn(async move { recognizer.recognize(&settings).await });

        let outcome = match job.await {
            Ok(Ok(Some(text))) if !text.trim().is_empty() => {
                CaptureOutcome::Transcript(text.trim().to_string())
            }
            Ok(Ok(_)) => CaptureOutcome::Ended,
            Ok(Err(e)) => {
                warn!("Speech recognition failed: {}", e);
                CaptureOutcome::Failed(e.to_string())
            }
            Err(e) => CaptureOutcome::Failed(e.to_string()),
        };

        drop(guard);
        self.events.publish(AppEvent::CaptureFinished {
            outcome: outcome.clone(),
        });

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::speech::infrastructure::{ScriptedRecognizer, UnavailableRecognizer};
    use crate::modules::speech::ports::SpeechError;
    use std::time::Duration;

    fn service(recognizer: Arc<dyn SpeechRecognizer>) -> SpeechInputService {
        SpeechInputService::new(recognizer, RecognitionSettings::default(), EventBus::new())
    }

    #[tokio::test]
    async fn test_transcript_is_returned_and_flag_cleared() {
        let recognizer = Arc::new(ScriptedRecognizer::new());
        recognizer.push_transcript("  what is a hypotenuse ");
        let service = service(recognizer.clone());

        let outcome = service.start_capture().await;

        assert_eq!(
            outcome,
            CaptureOutcome::Transcript("what is a hypotenuse".to_string())
        );
        assert!(!service.is_recognizing());
        assert_eq!(recognizer.seen_settings()[0].locale, "en-US");
    }

    #[tokio::test]
    async fn test_silence_and_errors_end_without_transcript() {
        let recognizer = Arc::new(ScriptedRecognizer::new());
        recognizer
            .push_silence()
            .push_error(SpeechError::Process("no-speech".to_string()));
        let service = service(recognizer);

        assert_eq!(service.start_capture().await, CaptureOutcome::Ended);
        assert!(matches!(
            service.start_capture().await,
            CaptureOutcome::Failed(_)
        ));
        assert!(!service.is_recognizing());
    }

    #[tokio::test]
    async fn test_unsupported_platform_leaves_flag_false() {
        let service = service(Arc::new(UnavailableRecognizer));

        assert_eq!(service.start_capture().await, CaptureOutcome::Unsupported);
        assert!(!service.is_recognizing());
    }

    #[tokio::test]
    async fn test_second_start_while_active_is_rejected() {
        let recognizer = Arc::new(ScriptedRecognizer::new().with_delay(Duration::from_millis(30)));
        recognizer.push_transcript("first");
        let service = service(recognizer.clone());
        let mut flag = service.subscribe();

        let running = tokio::spawn({
            let service = service.clone();
            async move { service.start_capture().await }
        });

        flag.wait_for(|active| *active).await.unwrap();
        assert_eq!(service.start_capture().await, CaptureOutcome::AlreadyActive);

        assert_eq!(
            running.await.unwrap(),
            CaptureOutcome::Transcript("first".to_string())
        );
        assert_eq!(recognizer.seen_settings().len(), 1);
        assert!(!service.is_recognizing());
    }
}
