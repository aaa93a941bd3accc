use serde::Serialize;

use super::message::Message;

/// 对话记录
///
/// 只追加、有序；没有删除或修改接口
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::chat::domain::{EmotionTag, ExchangeSeq, MessageRole};

    #[test]
    fn test_transcript_keeps_insertion_order() {
        let mut transcript = Transcript::new();
        let seq = ExchangeSeq::first();
        transcript.push(Message::new_user(seq, "question"));
        transcript.push(Message::new_assistant(
            seq,
            "answer",
            vec![],
            EmotionTag::default(),
        ));

        let roles: Vec<_> = transcript.iter().map(Message::role).collect();
        assert_eq!(roles, vec![MessageRole::User, MessageRole::Assistant]);
        assert_eq!(transcript.last().map(Message::content), Some("answer"));
    }
}
