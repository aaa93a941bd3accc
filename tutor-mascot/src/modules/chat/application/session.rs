use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::modules::chat::domain::{
    EmotionTag, ExchangeSeq, Message, SessionId, Transcript,
};

/// 交换状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ExchangeState {
    Idle,
    AwaitingResponse,
}

/// 在途交换计数守卫
///
/// 创建时计数加一，析构时减一；成功、失败、panic 都会回到 Idle
pub(crate) struct InFlightGuard {
    counter: Arc<AtomicUsize>,
}

impl InFlightGuard {
    fn new(counter: Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self { counter }
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.counter.fetch_sub(1, Ordering::SeqCst);
    }
}

/// 对话会话
///
/// 独占对话记录、待发送输入和当前情感标签。
/// 对话记录只追加，不修改、不删除。
#[derive(Debug)]
pub struct ConversationSession {
    session_id: SessionId,
    transcript: Transcript,
    pending_input: String,
    emotion: EmotionTag,
    next_exchange: ExchangeSeq,
    in_flight: Arc<AtomicUsize>,
}

impl ConversationSession {
    pub fn new(
        session_id: SessionId,
        initial_input: impl Into<String>,
        default_emotion: EmotionTag,
    ) -> Self {
        Self {
            session_id,
            transcript: Transcript::new(),
            pending_input: initial_input.into(),
            emotion: default_emotion,
            next_exchange: ExchangeSeq::first(),
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    // Getters
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn emotion(&self) -> &EmotionTag {
        &self.emotion
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub fn state(&self) -> ExchangeState {
        if self.in_flight() == 0 {
            ExchangeState::Idle
        } else {
            ExchangeState::AwaitingResponse
        }
    }

    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
    }

    /// 取出待提交文本并立即清空输入（无论之后请求成功与否）
    ///
    /// 显式文本优先于输入框内容；去掉首尾空白后为空时返回 None，输入保持不变
    pub(crate) fn take_submission(&mut self, explicit: Option<&str>) -> Option<String> {
        let text = explicit
            .unwrap_or(&self.pending_input)
            .trim()
            .to_string();

        if text.is_empty() {
            return None;
        }

        self.pending_input.clear();
        Some(text)
    }

    /// 标记一个交换进入在途状态
    pub(crate) fn track_exchange(&self) -> InFlightGuard {
        InFlightGuard::new(self.in_flight.clone())
    }

    /// 追加用户消息并分配交换序号
    pub(crate) fn append_user(&mut self, text: impl Into<String>) -> Message {
        let exchange = self.next_exchange;
        self.next_exchange = exchange.next();

        let message = Message::new_user(exchange, text);
        self.transcript.push(message.clone());
        message
    }

    /// 追加助手消息并更新情感标签
    pub(crate) fn append_assistant(
        &mut self,
        exchange: ExchangeSeq,
        text: impl Into<String>,
        sources: Vec<String>,
        emotion: EmotionTag,
    ) -> Message {
        let message = Message::new_assistant(exchange, text, sources, emotion.clone());
        self.transcript.push(message.clone());
        self.emotion = emotion;
        message
    }

    /// 当前状态的只读快照
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.session_id.clone(),
            messages: self.transcript.messages().to_vec(),
            pending_input: self.pending_input.clone(),
            emotion: self.emotion.clone(),
            state: self.state(),
        }
    }
}

/// 会话快照（供界面渲染）
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub session_id: SessionId,
    pub messages: Vec<Message>,
    pub pending_input: String,
    pub emotion: EmotionTag,
    pub state: ExchangeState,
}
