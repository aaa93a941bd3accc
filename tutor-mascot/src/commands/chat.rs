// Chat Commands
//
// 对话相关的命令处理器，业务逻辑全部交给 ChatModule

use tokio::task::JoinHandle;

use crate::infrastructure::AppState;
use crate::modules::chat::{
    GetTranscriptQuery, HealthStatus, Operation, SessionSnapshot, SubmitExchangeCommand,
    SubmitExchangeResponse,
};
use crate::shared::AppResult;

/// 提交一次交换
///
/// 在后台任务中执行，调用方不必等待，输入可以继续
pub fn chat_submit(
    state: &AppState,
    operation: Operation,
    text: Option<String>,
) -> JoinHandle<AppResult<SubmitExchangeResponse>> {
    let chat = state.chat.clone();

    tokio::spawn(async move {
        let command = SubmitExchangeCommand { operation, text };
        match chat.submit(command).await {
            Ok(response) => {
                tracing::info!("[chat_submit] Exchange {} completed", response.exchange);
                Ok(response)
            }
            Err(error) => {
                tracing::error!("[chat_submit] Error: {}", error);
                Err(error.into())
            }
        }
    })
}

/// 替换待发送输入
pub async fn chat_set_input(state: &AppState, text: String) {
    tracing::debug!("[chat_set_input] {} chars", text.len());
    state.chat.set_pending_input(text).await;
}

/// 当前会话快照
pub async fn chat_snapshot(state: &AppState) -> AppResult<SessionSnapshot> {
    Ok(state.chat.snapshot(GetTranscriptQuery::all()).await?)
}

/// 远端服务健康检查
pub async fn chat_health(state: &AppState) -> AppResult<HealthStatus> {
    let status = state.chat.health_check().await?;

    if status.is_healthy {
        tracing::info!("[chat_health] Remote service healthy ({:?} ms)", status.latency_ms);
    } else {
        tracing::warn!(
            "[chat_health] Remote service unhealthy: {}",
            status.error_message.as_deref().unwrap_or("unknown")
        );
    }

    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::modules::chat::{MockQueryAdapter, QueryError, RemoteReply};
    use crate::modules::config::AppConfig;
    use crate::modules::speech::{RecognitionSettings, ScriptedRecognizer, ScriptedSynthesizer, SpeechModule};
    use crate::shared::AppError;

    fn state(remote: Arc<MockQueryAdapter>) -> AppState {
        AppState::with_ports(AppConfig::default(), remote, |events| {
            SpeechModule::with_adapters(
                Arc::new(ScriptedSynthesizer::new()),
                Arc::new(ScriptedRecognizer::new()),
                RecognitionSettings::default(),
                events,
            )
        })
    }

    #[tokio::test]
    async fn test_submit_runs_in_background() {
        let remote = Arc::new(MockQueryAdapter::new());
        remote.push_reply(RemoteReply::new("Pythagoras...", "excited"));
        let state = state(remote.clone());

        let response = chat_submit(&state, Operation::Query, None).await.unwrap().unwrap();
        assert_eq!(response.user_message.content(), "Explain a^2 + b^2 = c^2");

        let snapshot = chat_snapshot(&state).await.unwrap();
        assert_eq!(snapshot.messages.len(), 2);
        assert_eq!(snapshot.emotion.as_str(), "excited");
    }

    #[tokio::test]
    async fn test_submit_failure_surfaces_error() {
        let remote = Arc::new(MockQueryAdapter::new());
        remote.push_error(QueryError::Status {
            code: 500,
            body: "Internal Server Error".to_string(),
        });
        let state = state(remote);

        let result = chat_submit(&state, Operation::Chat, Some("hi".to_string()))
            .await
            .unwrap();
        assert!(matches!(result, Err(AppError::ApplicationError(_))));

        chat_set_input(&state, "try again".to_string()).await;
        let snapshot = chat_snapshot(&state).await.unwrap();
        assert_eq!(snapshot.messages.len(), 1);
        assert_eq!(snapshot.pending_input, "try again");
    }
}
