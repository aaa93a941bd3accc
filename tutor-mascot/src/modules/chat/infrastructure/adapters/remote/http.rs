// HTTP 问答服务适配器
//
// 通过 reqwest 以 JSON POST 调用远端 /query 与 /chat

use async_trait::async_trait;
use reqwest::Client;
use std::time::Instant;
use tracing::{debug, error, warn};

use crate::modules::chat::ports::{
    HealthStatus, QueryError, QueryPort, RemoteReply, RemoteRequest,
};

/// HTTP 问答服务适配器
///
/// 不设置客户端超时，沿用 reqwest 默认行为；失败不重试。
pub struct HttpQueryAdapter {
    client: Client,
    base_url: String,
}

impl HttpQueryAdapter {
    /// 创建新的适配器
    pub fn new(base_url: impl Into<String>) -> Result<Self, QueryError> {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/').to_string();

        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(QueryError::InvalidBaseUrl(base_url));
        }

        let client = Client::builder()
            .build()
            .map_err(|e| QueryError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: trimmed,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 拼接完整 URL
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl QueryPort for HttpQueryAdapter {
    async fn call(&self, request: RemoteRequest) -> Result<RemoteReply, QueryError> {
        let path = request.operation().path();

        debug!(
            "Sending {} request for session {}",
            path,
            request.session_id()
        );

        let response = self
            .client
            .post(self.url(path))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| QueryError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("{} API error: {} - {}", path, status, body);
            return Err(QueryError::Status {
                code: status.as_u16(),
                body,
            });
        }

        let reply: RemoteReply = response
            .json()
            .await
            .map_err(|e| QueryError::Decode(e.to_string()))?;

        if let Some(echoed) = reply.session_id.as_deref() {
            if echoed != request.session_id().as_str() {
                warn!(
                    "{} echoed session {} but request used {}",
                    path,
                    echoed,
                    request.session_id()
                );
            }
        }

        Ok(reply)
    }

    async fn health_check(&self) -> Result<HealthStatus, QueryError> {
        let started = Instant::now();

        let response = self
            .client
            .get(self.url("/health"))
            .send()
            .await
            .map_err(|e| QueryError::Network(e.to_string()))?;

        let latency_ms = Some(started.elapsed().as_millis() as u64);
        let status = response.status();

        if status.is_success() {
            Ok(HealthStatus {
                is_healthy: true,
                latency_ms,
                error_message: None,
            })
        } else {
            Ok(HealthStatus {
                is_healthy: false,
                latency_ms,
                error_message: Some(format!("status {}", status)),
            })
        }
    }
}
