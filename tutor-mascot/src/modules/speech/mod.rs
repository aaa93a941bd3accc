// Speech Module - 语音模块
//
// 实现六边形架构：
// - domain: 合成任务、识别参数、识别结果
// - ports: 平台语音能力的抽象接口
// - infrastructure: 本机命令、不可用、脚本化三类适配器
// - application: 语音输出队列与识别会话服务

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::{SpeechInputService, SpeechOutputService};
pub use domain::{CaptureOutcome, RecognitionSettings, Utterance, DEFAULT_LOCALE};
pub use infrastructure::{
    CommandRecognizer, CommandSynthesizer, ScriptedRecognizer, ScriptedSynthesizer,
    UnavailableRecognizer, UnavailableSynthesizer,
};
pub use ports::{SpeechError, SpeechRecognizer, SpeechSynthesizer};

use std::sync::Arc;

use crate::infrastructure::EventBus;
use crate::modules::config::SpeechConfig;

/// Speech 模块容器
#[derive(Clone)]
pub struct SpeechModule {
    output: SpeechOutputService,
    input: SpeechInputService,
}

impl SpeechModule {
    /// 按配置绑定本机语音能力；关闭语音时两个方向都不可用
    pub fn from_config(config: &SpeechConfig, events: EventBus) -> Self {
        let (synthesizer, recognizer): (Arc<dyn SpeechSynthesizer>, Arc<dyn SpeechRecognizer>) =
            if config.enabled {
                (
                    Arc::new(CommandSynthesizer::from_config(
                        config.synthesizer_command.as_deref(),
                    )),
                    Arc::new(CommandRecognizer::from_config(
                        config.recognizer_command.as_deref(),
                    )),
                )
            } else {
                (Arc::new(UnavailableSynthesizer), Arc::new(UnavailableRecognizer))
            };

        Self::with_adapters(
            synthesizer,
            recognizer,
            RecognitionSettings::for_locale(config.locale.clone()),
            events,
        )
    }

    /// 使用自定义适配器创建
    pub fn with_adapters(
        synthesizer: Arc<dyn SpeechSynthesizer>,
        recognizer: Arc<dyn SpeechRecognizer>,
        settings: RecognitionSettings,
        events: EventBus,
    ) -> Self {
        Self {
            output: SpeechOutputService::new(synthesizer, events.clone()),
            input: SpeechInputService::new(recognizer, settings, events),
        }
    }

    pub fn output(&self) -> &SpeechOutputService {
        &self.output
    }

    pub fn input(&self) -> &SpeechInputService {
        &self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_speech_binds_unavailable_adapters() {
        let config = SpeechConfig {
            enabled: false,
            ..SpeechConfig::default()
        };
        let module = SpeechModule::from_config(&config, EventBus::new());

        assert!(!module.output().is_enabled());
        assert!(!module.input().is_supported());
        assert_eq!(module.input().start_capture().await, CaptureOutcome::Unsupported);
    }

    #[tokio::test]
    async fn test_locale_is_passed_to_recognizer() {
        let config = SpeechConfig {
            locale: "en-AU".to_string(),
            recognizer_command: Some("my-stt --fast".to_string()),
            ..SpeechConfig::default()
        };
        let module = SpeechModule::from_config(&config, EventBus::new());

        assert!(module.input().is_supported());
        assert_eq!(module.input().settings().locale, "en-AU");
    }
}
