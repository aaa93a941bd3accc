use tokio::sync::broadcast;

use crate::modules::chat::domain::{EmotionTag, ExchangeSeq};
use crate::modules::chat::ports::Operation;
use crate::modules::speech::CaptureOutcome;

/// 应用事件
///
/// 会话与语音服务发布，前端订阅后刷新界面
#[derive(Clone, Debug, PartialEq)]
pub enum AppEvent {
    PendingInputChanged {
        text: String,
    },
    ExchangeStarted {
        exchange: ExchangeSeq,
        operation: Operation,
    },
    ExchangeCompleted {
        exchange: ExchangeSeq,
        emotion: EmotionTag,
    },
    ExchangeFailed {
        exchange: ExchangeSeq,
        error: String,
    },
    SpeechStarted {
        text: String,
    },
    SpeechEnded,
    CaptureStarted,
    CaptureFinished {
        outcome: CaptureOutcome,
    },
}

/// 事件总线
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<AppEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(100);
        Self { sender }
    }

    pub fn publish(&self, event: AppEvent) {
        tracing::debug!("[EventBus] Publishing event: {:?}", event);
        // 没有订阅者时发送失败，直接忽略
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
