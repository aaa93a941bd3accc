// Chat Queries
// 查询处理器（只读）

mod get_transcript;

pub use get_transcript::*;
