pub mod commands;
pub mod infrastructure;
pub mod modules;
pub mod shared;

use std::io::{self, Stdout};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{broadcast, Mutex};
use tracing_subscriber::EnvFilter;

use commands::UiAction;
use infrastructure::{AppEvent, AppState};
use modules::config::{AppConfig, ExchangePolicy};
use modules::mascot::TerminalRenderer;
use modules::speech::CaptureOutcome;
use modules::ConfigModule;
use shared::AppResult;

type SharedRenderer = Arc<Mutex<TerminalRenderer<Stdout>>>;

/// 命令行覆盖项，优先于环境变量
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub api_base: Option<String>,
    pub no_speech: bool,
    pub serialized: bool,
    pub verbose: bool,
}

impl RunOptions {
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(api_base) = &self.api_base {
            config.api.base_url = api_base.clone();
        }
        if self.no_speech {
            config.speech.enabled = false;
        }
        if self.serialized {
            config.exchange = ExchangePolicy::Serialized;
        }
    }
}

/// 初始化日志，输出到 stderr，不和界面混在一起
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

pub async fn run(options: RunOptions) -> AppResult<()> {
    init_tracing(options.verbose);

    tracing::info!("Tutor mascot starting...");

    let mut config = ConfigModule::from_env()?.into_config();
    options.apply(&mut config);

    let state = AppState::new(config)?;

    if let Err(e) = commands::chat_health(&state).await {
        tracing::warn!("Remote service unreachable at startup: {}", e);
    }

    let renderer: SharedRenderer = Arc::new(Mutex::new(TerminalRenderer::new(io::stdout())));
    {
        let mut out = renderer.lock().await;
        commands::mascot_render(&state, &mut *out).await?;
        out.render_help()?;
    }

    let forwarder = tokio::spawn(forward_events(
        state.clone(),
        renderer.clone(),
        state.events.subscribe(),
    ));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let action = match UiAction::parse(&line) {
            Ok(Some(action)) => action,
            Ok(None) => continue,
            Err(e) => {
                renderer.lock().await.notice(&e.to_string())?;
                continue;
            }
        };

        if !dispatch(&state, &renderer, action).await? {
            break;
        }
    }

    forwarder.abort();
    tracing::info!("Tutor mascot exiting");
    Ok(())
}

/// 执行一个界面动作，返回 false 表示退出
async fn dispatch(state: &AppState, renderer: &SharedRenderer, action: UiAction) -> AppResult<bool> {
    match action {
        UiAction::SetInput(text) => commands::chat_set_input(state, text).await,
        UiAction::Submit { operation, text } => {
            // 不等待响应，继续接收输入
            drop(commands::chat_submit(state, operation, text));
        }
        UiAction::Capture => {
            let state = state.clone();
            let renderer = renderer.clone();
            tokio::spawn(async move {
                let notice = match commands::speech_capture(&state).await {
                    CaptureOutcome::Unsupported => {
                        Some("Speech recognition is not supported on this platform.")
                    }
                    CaptureOutcome::AlreadyActive => Some("Already listening."),
                    _ => None,
                };
                if let Some(notice) = notice {
                    if let Err(e) = renderer.lock().await.notice(notice) {
                        tracing::error!("Failed to write notice: {}", e);
                    }
                }
            });
        }
        UiAction::Look { x, y } => {
            commands::mascot_look(state, x, y).await;
            commands::mascot_render(state, &mut *renderer.lock().await).await?;
        }
        UiAction::Health => {
            let text = match commands::chat_health(state).await {
                Ok(status) if status.is_healthy => format!(
                    "Remote service is healthy ({} ms)",
                    status.latency_ms.unwrap_or_default()
                ),
                Ok(status) => format!(
                    "Remote service is unhealthy: {}",
                    status.error_message.unwrap_or_default()
                ),
                Err(e) => format!("Remote service unreachable: {}", e),
            };
            renderer.lock().await.notice(&text)?;
        }
        UiAction::Show => commands::mascot_render(state, &mut *renderer.lock().await).await?,
        UiAction::Help => renderer.lock().await.render_help()?,
        UiAction::Quit => return Ok(false),
    }
    Ok(true)
}

/// 把应用事件交给吉祥物并重绘
async fn forward_events(
    state: AppState,
    renderer: SharedRenderer,
    mut receiver: broadcast::Receiver<AppEvent>,
) {
    loop {
        let event = match receiver.recv().await {
            Ok(event) => event,
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!("[forward_events] Skipped {} events", skipped);
                continue;
            }
            Err(broadcast::error::RecvError::Closed) => break,
        };

        state.mascot.lock().await.apply(&event);

        let mut out = renderer.lock().await;
        if let AppEvent::ExchangeFailed { exchange, error } = &event {
            if let Err(e) = out.notice(&format!("Exchange {} failed: {}", exchange, error)) {
                tracing::error!("Failed to write notice: {}", e);
            }
        }
        if let Err(e) = commands::mascot_render(&state, &mut *out).await {
            tracing::error!("Failed to render: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_options_override_config() {
        let mut config = AppConfig::default();
        RunOptions {
            api_base: Some("http://tutor.test:9000".to_string()),
            no_speech: true,
            serialized: true,
            verbose: false,
        }
        .apply(&mut config);

        assert_eq!(config.api.base_url, "http://tutor.test:9000");
        assert!(!config.speech.enabled);
        assert_eq!(config.exchange, ExchangePolicy::Serialized);
    }

    #[test]
    fn test_default_options_keep_config() {
        let mut config = AppConfig::default();
        RunOptions::default().apply(&mut config);
        assert_eq!(config, AppConfig::default());
    }
}
