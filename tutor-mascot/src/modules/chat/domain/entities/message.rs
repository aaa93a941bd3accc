use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::super::value_objects::{EmotionTag, ExchangeSeq, MessageId};

/// 消息角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// 用户消息
    User,
    /// 助手回复
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

/// 消息实体
///
/// 创建后不可修改，只能追加到 Transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    id: MessageId,
    role: MessageRole,
    content: String,
    /// 引用来源（仅助手消息，按服务端顺序）
    sources: Vec<String>,
    /// 情感标签（仅助手消息）
    emotion: Option<EmotionTag>,
    /// 所属交换序号
    exchange: ExchangeSeq,
    created_at: DateTime<Utc>,
}

impl Message {
    /// 创建用户消息
    pub fn new_user(exchange: ExchangeSeq, content: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            role: MessageRole::User,
            content: content.into(),
            sources: Vec::new(),
            emotion: None,
            exchange,
            created_at: Utc::now(),
        }
    }

    /// 创建助手消息
    pub fn new_assistant(
        exchange: ExchangeSeq,
        content: impl Into<String>,
        sources: Vec<String>,
        emotion: EmotionTag,
    ) -> Self {
        Self {
            id: MessageId::new(),
            role: MessageRole::Assistant,
            content: content.into(),
            sources,
            emotion: Some(emotion),
            exchange,
            created_at: Utc::now(),
        }
    }

    // Getters
    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn role(&self) -> MessageRole {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn emotion(&self) -> Option<&EmotionTag> {
        self.emotion.as_ref()
    }

    pub fn exchange(&self) -> ExchangeSeq {
        self.exchange
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_message() {
        let msg = Message::new_user(ExchangeSeq::first(), "Hello, tutor!");

        assert_eq!(msg.role(), MessageRole::User);
        assert_eq!(msg.content(), "Hello, tutor!");
        assert!(msg.sources().is_empty());
        assert!(msg.emotion().is_none());
    }

    #[test]
    fn test_create_assistant_message_with_sources() {
        let msg = Message::new_assistant(
            ExchangeSeq::first(),
            "Pythagoras...",
            vec!["wiki".to_string(), "book".to_string()],
            EmotionTag::from("excited"),
        );

        assert_eq!(msg.role(), MessageRole::Assistant);
        assert_eq!(msg.sources(), ["wiki", "book"]);
        assert_eq!(msg.emotion().map(EmotionTag::as_str), Some("excited"));
    }
}
