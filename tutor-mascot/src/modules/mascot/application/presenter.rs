use crate::infrastructure::AppEvent;
use crate::modules::chat::domain::EmotionTag;
use crate::modules::mascot::domain::{GazeOffset, MascotFace, MascotVariant};
use crate::shared::{mouth_frames, MouthShape};

/// 吉祥物展示状态
///
/// 订阅应用事件，维护表情、说话、聆听、视线和口型动画
#[derive(Debug)]
pub struct MascotPresenter {
    face: MascotFace,
    area: (f32, f32),
    frames: Vec<MouthShape>,
    frame: usize,
}

impl MascotPresenter {
    /// `area` 为指针坐标所在区域的宽高
    pub fn new(emotion: EmotionTag, amplitude: f32, area: (f32, f32)) -> Self {
        Self {
            face: MascotFace::new(emotion, GazeOffset::centered(amplitude)),
            area,
            frames: Vec::new(),
            frame: 0,
        }
    }

    pub fn face(&self) -> &MascotFace {
        &self.face
    }

    /// 应用一个事件，返回外观是否变化
    pub fn apply(&mut self, event: &AppEvent) -> bool {
        match event {
            AppEvent::ExchangeCompleted { emotion, .. } => {
                self.set_emotion(emotion.clone());
                true
            }
            AppEvent::SpeechStarted { text } => {
                self.face.speaking = true;
                self.frames = mouth_frames(text);
                self.frame = 0;
                self.face.mouth = self.frames.first().copied().unwrap_or_default();
                true
            }
            AppEvent::SpeechEnded => {
                self.face.speaking = false;
                self.frames.clear();
                self.face.mouth = MouthShape::Closed;
                true
            }
            AppEvent::CaptureStarted => {
                self.face.listening = true;
                true
            }
            AppEvent::CaptureFinished { .. } => {
                self.face.listening = false;
                true
            }
            AppEvent::PendingInputChanged { .. }
            | AppEvent::ExchangeStarted { .. }
            | AppEvent::ExchangeFailed { .. } => false,
        }
    }

    pub fn set_emotion(&mut self, emotion: EmotionTag) {
        self.face.variant = MascotVariant::from_emotion(&emotion);
        self.face.emotion = emotion;
    }

    /// 以会话和语音服务的当前状态为准校正外观（事件可能丢失或乱序）
    pub fn sync(&mut self, emotion: &EmotionTag, speaking: bool, listening: bool) {
        if &self.face.emotion != emotion {
            self.set_emotion(emotion.clone());
        }
        if !speaking && self.face.speaking {
            self.frames.clear();
            self.face.mouth = MouthShape::Closed;
        }
        self.face.speaking = speaking;
        self.face.listening = listening;
    }

    /// 指针移动，只改变视线
    pub fn look_at(&mut self, x: f32, y: f32) {
        let (width, height) = self.area;
        self.face.gaze = GazeOffset::from_pointer(x, y, width, height, self.face.gaze.amplitude);
    }

    /// 说话时推进一帧口型，循环播放
    pub fn advance_mouth(&mut self) {
        if !self.face.speaking || self.frames.is_empty() {
            return;
        }
        self.frame = (self.frame + 1) % self.frames.len();
        self.face.mouth = self.frames[self.frame];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::chat::domain::ExchangeSeq;
    use crate::modules::speech::CaptureOutcome;

    fn presenter() -> MascotPresenter {
        MascotPresenter::new(EmotionTag::default(), 8.0, (100.0, 100.0))
    }

    #[test]
    fn test_emotion_round_trip() {
        let mut presenter = presenter();
        assert_eq!(presenter.face().variant, MascotVariant::Explaining);

        let changed = presenter.apply(&AppEvent::ExchangeCompleted {
            exchange: ExchangeSeq::first(),
            emotion: EmotionTag::new("excited"),
        });
        assert!(changed);
        assert_eq!(presenter.face().style_key(), "excited");
        assert_eq!(presenter.face().variant, MascotVariant::Excited);

        presenter.apply(&AppEvent::ExchangeCompleted {
            exchange: ExchangeSeq::first().next(),
            emotion: EmotionTag::new("puzzled"),
        });
        assert_eq!(presenter.face().style_key(), "puzzled");
        assert_eq!(presenter.face().variant, MascotVariant::Default);
    }

    #[test]
    fn test_speaking_cycles_mouth() {
        let mut presenter = presenter();
        presenter.apply(&AppEvent::SpeechStarted {
            text: "hello".to_string(),
        });
        assert!(presenter.face().speaking);
        assert_eq!(presenter.face().mouth, MouthShape::E);

        presenter.advance_mouth();
        assert_eq!(presenter.face().mouth, MouthShape::O);
        presenter.advance_mouth();
        presenter.advance_mouth();
        assert_eq!(presenter.face().mouth, MouthShape::E);

        presenter.apply(&AppEvent::SpeechEnded);
        assert!(!presenter.face().speaking);
        presenter.advance_mouth();
        assert_eq!(presenter.face().mouth, MouthShape::Closed);
    }

    #[test]
    fn test_listening_follows_capture() {
        let mut presenter = presenter();
        presenter.apply(&AppEvent::CaptureStarted);
        assert!(presenter.face().listening);

        presenter.apply(&AppEvent::CaptureFinished {
            outcome: CaptureOutcome::Ended,
        });
        assert!(!presenter.face().listening);
    }

    #[test]
    fn test_sync_overrides_missed_events() {
        let mut presenter = presenter();
        presenter.apply(&AppEvent::SpeechStarted {
            text: "hello".to_string(),
        });
        presenter.apply(&AppEvent::CaptureStarted);

        // SpeechEnded / CaptureFinished / ExchangeCompleted 都没有收到
        presenter.sync(&EmotionTag::new("thinking"), false, false);

        let face = presenter.face();
        assert!(!face.speaking);
        assert!(!face.listening);
        assert_eq!(face.mouth, MouthShape::Closed);
        assert_eq!(face.style_key(), "thinking");
        assert_eq!(face.variant, MascotVariant::Thinking);
    }

    #[test]
    fn test_look_at_only_moves_gaze() {
        let mut presenter = presenter();
        let before = presenter.face().clone();

        presenter.look_at(100.0, 0.0);
        assert_eq!(presenter.face().gaze.dx, 4.0);
        assert_eq!(presenter.face().gaze.dy, -4.0);
        assert_eq!(presenter.face().emotion, before.emotion);
        assert_eq!(presenter.face().speaking, before.speaking);

        assert!(!presenter.apply(&AppEvent::PendingInputChanged {
            text: String::new(),
        }));
    }
}
