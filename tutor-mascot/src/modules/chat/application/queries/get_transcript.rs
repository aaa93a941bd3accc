use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::super::session::{ConversationSession, SessionSnapshot};
use super::super::{ApplicationError, QueryHandler};

/// 获取会话快照查询
#[derive(Debug, Clone, Default)]
pub struct GetTranscriptQuery {
    /// 只返回最近的 N 条消息
    pub last: Option<usize>,
}

impl GetTranscriptQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn last(count: usize) -> Self {
        Self { last: Some(count) }
    }
}

/// 获取会话快照处理器
pub struct GetTranscriptHandler {
    session: Arc<RwLock<ConversationSession>>,
}

impl GetTranscriptHandler {
    pub fn new(session: Arc<RwLock<ConversationSession>>) -> Self {
        Self { session }
    }
}

#[async_trait]
impl QueryHandler<GetTranscriptQuery, SessionSnapshot> for GetTranscriptHandler {
    async fn handle(&self, query: GetTranscriptQuery) -> Result<SessionSnapshot, ApplicationError> {
        let mut snapshot = self.session.read().await.snapshot();

        if let Some(count) = query.last {
            let skip = snapshot.messages.len().saturating_sub(count);
            snapshot.messages.drain(..skip);
        }

        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::chat::domain::{EmotionTag, SessionId};

    #[tokio::test]
    async fn test_get_last_messages() {
        let mut session = ConversationSession::new(
            SessionId::from_string("s"),
            "",
            EmotionTag::default(),
        );
        for text in ["a", "b", "c"] {
            session.append_user(text);
        }
        let handler = GetTranscriptHandler::new(Arc::new(RwLock::new(session)));

        let snapshot = handler.handle(GetTranscriptQuery::last(2)).await.unwrap();
        let contents: Vec<_> = snapshot.messages.iter().map(|m| m.content()).collect();
        assert_eq!(contents, vec!["b", "c"]);

        let snapshot = handler.handle(GetTranscriptQuery::all()).await.unwrap();
        assert_eq!(snapshot.messages.len(), 3);
    }
}
