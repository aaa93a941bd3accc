// Chat Commands
// 命令处理器（有副作用）

mod submit_exchange;

pub use submit_exchange::*;
