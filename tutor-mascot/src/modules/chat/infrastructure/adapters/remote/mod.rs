// Remote Adapters
// 远端问答服务的适配器实现

mod http;
mod mock;

pub use http::*;
pub use mock::*;
