use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use crate::modules::chat::ports::{
    HealthStatus, QueryError, QueryPort, RemoteReply, RemoteRequest,
};

/// 脚本化的响应
struct ScriptedReply {
    result: Result<RemoteReply, QueryError>,
    delay: Option<Duration>,
}

/// Mock 问答服务适配器
///
/// 按先进先出顺序返回预设结果，并记录每一次请求。
/// 脚本用完后返回一条回显用户输入的默认回复。
#[derive(Default)]
pub struct MockQueryAdapter {
    script: Mutex<VecDeque<ScriptedReply>>,
    requests: Mutex<Vec<RemoteRequest>>,
}

impl MockQueryAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一条成功响应
    pub fn push_reply(&self, reply: RemoteReply) -> &Self {
        self.push(Ok(reply), None)
    }

    /// 追加一条延迟返回的成功响应
    pub fn push_delayed_reply(&self, reply: RemoteReply, delay: Duration) -> &Self {
        self.push(Ok(reply), Some(delay))
    }

    /// 追加一条失败响应
    pub fn push_error(&self, error: QueryError) -> &Self {
        self.push(Err(error), None)
    }

    fn push(&self, result: Result<RemoteReply, QueryError>, delay: Option<Duration>) -> &Self {
        if let Ok(mut script) = self.script.lock() {
            script.push_back(ScriptedReply { result, delay });
        }
        self
    }

    /// 已收到的请求（按到达顺序）
    pub fn requests(&self) -> Vec<RemoteRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl QueryPort for MockQueryAdapter {
    async fn call(&self, request: RemoteRequest) -> Result<RemoteReply, QueryError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        let scripted = self
            .script
            .lock()
            .ok()
            .and_then(|mut script| script.pop_front());

        match scripted {
            Some(ScriptedReply { result, delay }) => {
                if let Some(delay) = delay {
                    tokio::time::sleep(delay).await;
                }
                result
            }
            None => Ok(RemoteReply::new(
                format!("You said: {}", request.text()),
                "explaining",
            )),
        }
    }

    async fn health_check(&self) -> Result<HealthStatus, QueryError> {
        Ok(HealthStatus {
            is_healthy: true,
            latency_ms: Some(0),
            error_message: None,
        })
    }
}
