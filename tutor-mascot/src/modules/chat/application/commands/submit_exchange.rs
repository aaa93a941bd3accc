use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{info, warn};

use super::super::session::ConversationSession;
use super::super::{ApplicationError, CommandHandler};
use crate::infrastructure::{AppEvent, EventBus};
use crate::modules::chat::domain::{EmotionAnalyzer, ExchangeSeq, Message};
use crate::modules::chat::ports::{Operation, QueryPort, RemoteRequest};
use crate::modules::config::ExchangePolicy;
use crate::modules::speech::SpeechOutputService;

/// 提交交换命令
#[derive(Debug, Clone)]
pub struct SubmitExchangeCommand {
    /// 调用哪个远端操作
    pub operation: Operation,
    /// 显式文本；为空时使用输入框中的待发送文本
    pub text: Option<String>,
}

impl SubmitExchangeCommand {
    pub fn new(operation: Operation, text: Option<String>) -> Self {
        Self { operation, text }
    }

    /// 独立提问
    pub fn query(text: Option<String>) -> Self {
        Self::new(Operation::Query, text)
    }

    /// 会话内的一轮对话
    pub fn chat(text: Option<String>) -> Self {
        Self::new(Operation::Chat, text)
    }
}

/// 提交交换响应
#[derive(Debug, Clone)]
pub struct SubmitExchangeResponse {
    pub exchange: ExchangeSeq,
    pub user_message: Message,
    pub assistant_message: Message,
}

/// 提交交换命令处理器
///
/// 用户消息在请求发出前写入，助手消息在朗读开始前写入。
/// 等待响应期间不持有会话锁，用户可以继续输入或提交。
pub struct SubmitExchangeHandler {
    session: Arc<RwLock<ConversationSession>>,
    query_port: Arc<dyn QueryPort>,
    speech: SpeechOutputService,
    events: EventBus,
    emotion_analyzer: EmotionAnalyzer,
    top_k: Option<u32>,
    /// 串行策略下的单槽队列
    slot: Option<Arc<Mutex<()>>>,
}

impl SubmitExchangeHandler {
    pub fn new(
        session: Arc<RwLock<ConversationSession>>,
        query_port: Arc<dyn QueryPort>,
        speech: SpeechOutputService,
        events: EventBus,
        policy: ExchangePolicy,
    ) -> Self {
        let slot = match policy {
            ExchangePolicy::Concurrent => None,
            ExchangePolicy::Serialized => Some(Arc::new(Mutex::new(()))),
        };

        Self {
            session,
            query_port,
            speech,
            events,
            emotion_analyzer: EmotionAnalyzer::new(),
            top_k: None,
            slot,
        }
    }

    pub fn with_top_k(mut self, top_k: Option<u32>) -> Self {
        self.top_k = top_k;
        self
    }

    fn build_request(
        &self,
        operation: Operation,
        session: &ConversationSession,
        text: String,
    ) -> RemoteRequest {
        let session_id = session.session_id().clone();
        match operation {
            Operation::Query => RemoteRequest::Query {
                question: text,
                session_id,
                top_k: self.top_k,
            },
            Operation::Chat => RemoteRequest::Chat {
                session_id,
                message: text,
                top_k: self.top_k,
            },
        }
    }
}

#[async_trait]
impl CommandHandler<SubmitExchangeCommand, SubmitExchangeResponse> for SubmitExchangeHandler {
    async fn handle(
        &self,
        command: SubmitExchangeCommand,
    ) -> Result<SubmitExchangeResponse, ApplicationError> {
        // 取出输入并立即清空，同时进入等待状态
        let (text, in_flight) = {
            let mut session = self.session.write().await;
            let text = session
                .take_submission(command.text.as_deref())
                .ok_or_else(|| {
                    ApplicationError::ValidationError("Message content cannot be empty".to_string())
                })?;
            (text, session.track_exchange())
        };
        self.events.publish(AppEvent::PendingInputChanged {
            text: String::new(),
        });

        let _slot = match &self.slot {
            Some(slot) => Some(slot.clone().lock_owned().await),
            None => None,
        };

        // 追加用户消息，然后才发送请求
        let (user_message, request) = {
            let mut session = self.session.write().await;
            let user_message = session.append_user(&text);
            let request = self.build_request(command.operation, &session, text);
            (user_message, request)
        };
        let exchange = user_message.exchange();

        info!(
            "[Session] Exchange {} started via {}",
            exchange,
            command.operation.path()
        );
        self.events.publish(AppEvent::ExchangeStarted {
            exchange,
            operation: command.operation,
        });

        let reply = match self.query_port.call(request).await {
            Ok(reply) => reply,
            Err(e) => {
                drop(in_flight);
                warn!("[Session] Exchange {} failed: {}", exchange, e);
                self.events.publish(AppEvent::ExchangeFailed {
                    exchange,
                    error: e.to_string(),
                });
                return Err(e.into());
            }
        };

        let emotion = self
            .emotion_analyzer
            .resolve(reply.emotion.as_deref(), &reply.text);

        let assistant_message = {
            let mut session = self.session.write().await;
            session.append_assistant(exchange, reply.text.clone(), reply.sources, emotion.clone())
        };
        drop(in_flight);

        info!("[Session] Exchange {} completed ({})", exchange, emotion);
        self.events.publish(AppEvent::ExchangeCompleted { exchange, emotion });

        self.speech.speak(reply.text);

        Ok(SubmitExchangeResponse {
            exchange,
            user_message,
            assistant_message,
        })
    }
}
