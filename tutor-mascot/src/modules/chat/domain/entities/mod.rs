// Entities
// 实体：消息与对话记录

mod message;
mod transcript;

pub use message::{Message, MessageRole};
pub use transcript::Transcript;
