use std::sync::Arc;
use tokio::sync::Mutex;

use crate::infrastructure::EventBus;
use crate::modules::chat::QueryPort;
use crate::modules::config::AppConfig;
use crate::modules::mascot::MascotPresenter;
use crate::modules::speech::SpeechModule;
use crate::modules::ChatModule;
use crate::shared::AppResult;

/// `/look` 坐标所在区域的宽高
pub const POINTER_AREA: (f32, f32) = (100.0, 100.0);

/// 应用全局状态
///
/// 持有装配好的各个模块，命令层只通过这里访问业务逻辑
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub events: EventBus,
    pub chat: Arc<ChatModule>,
    pub speech: SpeechModule,
    pub mascot: Arc<Mutex<MascotPresenter>>,
}

impl AppState {
    /// 按配置装配真实的 HTTP 与本机语音适配器
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let events = EventBus::new();
        let speech = SpeechModule::from_config(&config.speech, events.clone());
        let chat = ChatModule::new(&config, speech.output().clone(), events.clone())?;
        Ok(Self::assemble(config, events, chat, speech))
    }

    /// 使用自定义端口装配
    pub fn with_ports(
        config: AppConfig,
        query_port: Arc<dyn QueryPort>,
        speech: impl FnOnce(EventBus) -> SpeechModule,
    ) -> Self {
        let events = EventBus::new();
        let speech = speech(events.clone());
        let chat = ChatModule::with_port(&config, query_port, speech.output().clone(), events.clone());
        Self::assemble(config, events, chat, speech)
    }

    fn assemble(config: AppConfig, events: EventBus, chat: ChatModule, speech: SpeechModule) -> Self {
        let mascot = MascotPresenter::new(
            config.mascot.default_emotion.as_str().into(),
            config.mascot.gaze_amplitude,
            POINTER_AREA,
        );

        tracing::info!(
            "[AppState] Session {} ready (api: {}, policy: {})",
            chat.session_id(),
            config.api.base_url,
            config.exchange.as_str()
        );

        Self {
            config: Arc::new(config),
            events,
            chat: Arc::new(chat),
            speech,
            mascot: Arc::new(Mutex::new(mascot)),
        }
    }
}
