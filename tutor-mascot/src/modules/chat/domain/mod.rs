// Chat Domain Layer
// 领域层包含实体、值对象和领域服务

pub mod entities;
pub mod services;
pub mod value_objects;

// 重导出常用类型
pub use entities::{Message, MessageRole, Transcript};
pub use services::EmotionAnalyzer;
pub use value_objects::{
    EmotionTag, ExchangeSeq, KnownEmotion, MessageId, SessionId, DEFAULT_EMOTION,
};
