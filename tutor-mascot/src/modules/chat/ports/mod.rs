// Chat Ports Layer
// 端口层定义与外部世界的抽象接口

mod query_port;

pub use query_port::{
    HealthStatus, Operation, QueryError, QueryPort, RemoteReply, RemoteRequest,
};
