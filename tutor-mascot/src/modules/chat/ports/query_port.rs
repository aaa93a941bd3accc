use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::modules::chat::domain::SessionId;

/// 远端问答服务错误类型
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error: {code} - {body}")]
    Status { code: u16, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

/// 远端操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// 独立提问
    Query,
    /// 会话内的一轮对话
    Chat,
}

impl Operation {
    pub fn path(&self) -> &'static str {
        match self {
            Operation::Query => "/query",
            Operation::Chat => "/chat",
        }
    }
}

/// 请求体
///
/// 序列化后与服务端的 JSON 结构一一对应
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RemoteRequest {
    Query {
        question: String,
        session_id: SessionId,
        #[serde(skip_serializing_if = "Option::is_none")]
        top_k: Option<u32>,
    },
    Chat {
        session_id: SessionId,
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        top_k: Option<u32>,
    },
}

impl RemoteRequest {
    pub fn operation(&self) -> Operation {
        match self {
            RemoteRequest::Query { .. } => Operation::Query,
            RemoteRequest::Chat { .. } => Operation::Chat,
        }
    }

    pub fn session_id(&self) -> &SessionId {
        match self {
            RemoteRequest::Query { session_id, .. } | RemoteRequest::Chat { session_id, .. } => {
                session_id
            }
        }
    }

    /// 用户输入的文本
    pub fn text(&self) -> &str {
        match self {
            RemoteRequest::Query { question, .. } => question,
            RemoteRequest::Chat { message, .. } => message,
        }
    }
}

/// 响应体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteReply {
    pub text: String,
    /// 缺省时由客户端本地推断
    #[serde(default)]
    pub emotion: Option<String>,
    #[serde(default)]
    pub sources: Vec<String>,
    /// /chat 会回传会话 ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl RemoteReply {
    pub fn new(text: impl Into<String>, emotion: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emotion: Some(emotion.into()),
            sources: Vec::new(),
            session_id: None,
        }
    }

    pub fn with_sources<I, S>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sources = sources.into_iter().map(Into::into).collect();
        self
    }
}

/// 健康状态
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub is_healthy: bool,
    pub latency_ms: Option<u64>,
    pub error_message: Option<String>,
}

/// 远端问答服务端口
///
/// 每次调用对应一次网络请求，不缓存、不去重、不重试
#[async_trait]
pub trait QueryPort: Send + Sync {
    /// 发送请求并解析响应
    async fn call(&self, request: RemoteRequest) -> Result<RemoteReply, QueryError>;

    /// 健康检查
    async fn health_check(&self) -> Result<HealthStatus, QueryError>;
}
