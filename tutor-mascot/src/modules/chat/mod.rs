// Chat Module - 对话模块
//
// 实现六边形架构（Hexagonal Architecture）：
// - domain: 领域层，包含实体、值对象和领域服务
// - ports: 端口层，定义远端问答服务的抽象接口
// - infrastructure: 基础设施层，实现端口的具体适配器
// - application: 应用层，实现 CQRS 命令和查询处理器

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// 重新导出常用类型
pub use application::{
    ApplicationError, CommandHandler, ConversationSession, ExchangeState, GetTranscriptHandler,
    GetTranscriptQuery, QueryHandler, SessionSnapshot, SubmitExchangeCommand,
    SubmitExchangeHandler, SubmitExchangeResponse,
};

pub use domain::{
    EmotionAnalyzer, EmotionTag, ExchangeSeq, KnownEmotion, Message, MessageId, MessageRole,
    SessionId, Transcript,
};

pub use infrastructure::{HttpQueryAdapter, MockQueryAdapter};

pub use ports::{HealthStatus, Operation, QueryError, QueryPort, RemoteReply, RemoteRequest};

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::infrastructure::{AppEvent, EventBus};
use crate::modules::config::AppConfig;
use crate::modules::speech::SpeechOutputService;

/// Chat 模块容器
///
/// 管理模块内的依赖注入
pub struct ChatModule {
    session_id: SessionId,
    session: Arc<RwLock<ConversationSession>>,
    query_port: Arc<dyn QueryPort>,
    events: EventBus,
    // Handlers
    submit_exchange_handler: SubmitExchangeHandler,
    get_transcript_handler: GetTranscriptHandler,
}

impl ChatModule {
    /// 使用 HTTP 适配器创建
    pub fn new(
        config: &AppConfig,
        speech: SpeechOutputService,
        events: EventBus,
    ) -> Result<Self, QueryError> {
        let query_port: Arc<dyn QueryPort> = Arc::new(HttpQueryAdapter::new(&config.api.base_url)?);
        Ok(Self::with_port(config, query_port, speech, events))
    }

    /// 使用自定义适配器创建
    pub fn with_port(
        config: &AppConfig,
        query_port: Arc<dyn QueryPort>,
        speech: SpeechOutputService,
        events: EventBus,
    ) -> Self {
        let session_id = SessionId::generate();
        let session = Arc::new(RwLock::new(ConversationSession::new(
            session_id.clone(),
            config.mascot.initial_input.clone(),
            EmotionTag::new(config.mascot.default_emotion.clone()),
        )));

        let submit_exchange_handler = SubmitExchangeHandler::new(
            session.clone(),
            query_port.clone(),
            speech,
            events.clone(),
            config.exchange,
        )
        .with_top_k(config.api.top_k);
        let get_transcript_handler = GetTranscriptHandler::new(session.clone());

        Self {
            session_id,
            session,
            query_port,
            events,
            submit_exchange_handler,
            get_transcript_handler,
        }
    }

    // Command handlers

    /// 提交一次交换
    pub async fn submit(
        &self,
        command: SubmitExchangeCommand,
    ) -> Result<SubmitExchangeResponse, ApplicationError> {
        self.submit_exchange_handler.handle(command).await
    }

    /// 替换输入框中的待发送文本（键入或语音识别结果）
    pub async fn set_pending_input(&self, text: impl Into<String>) {
        let text = text.into();
        self.session.write().await.set_pending_input(text.clone());
        self.events.publish(AppEvent::PendingInputChanged { text });
    }

    // Query handlers

    /// 获取会话快照
    pub async fn snapshot(&self, query: GetTranscriptQuery) -> Result<SessionSnapshot, ApplicationError> {
        self.get_transcript_handler.handle(query).await
    }

    /// 远端服务健康检查
    pub async fn health_check(&self) -> Result<HealthStatus, QueryError> {
        self.query_port.health_check().await
    }

    // Accessors

    /// 会话 ID 在启动时生成，之后不变
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }
}
