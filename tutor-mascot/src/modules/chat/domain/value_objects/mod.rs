// Value Objects
// 值对象：不可变，通过值比较

mod emotion;
mod message_id;
mod session_id;

pub use emotion::{EmotionTag, KnownEmotion, DEFAULT_EMOTION};
pub use message_id::{ExchangeSeq, MessageId};
pub use session_id::SessionId;
