// Config Loader
//
// 从配置来源组装 AppConfig

use std::str::FromStr;
use tracing::debug;

use crate::modules::config::domain::{AppConfig, ExchangePolicy, Switch};
use crate::modules::config::ports::{ConfigError, ConfigSource};

/// 配置键
pub mod keys {
    pub const API_BASE: &str = "TUTOR_API_BASE";
    /// 兼容旧前端的变量名
    pub const LEGACY_API_BASE: &str = "VITE_API_BASE";
    pub const TOP_K: &str = "TUTOR_TOP_K";
    pub const SPEECH: &str = "TUTOR_SPEECH";
    pub const LOCALE: &str = "TUTOR_LOCALE";
    pub const TTS_COMMAND: &str = "TUTOR_TTS_COMMAND";
    pub const STT_COMMAND: &str = "TUTOR_STT_COMMAND";
    pub const DEFAULT_EMOTION: &str = "TUTOR_DEFAULT_EMOTION";
    pub const GAZE_AMPLITUDE: &str = "TUTOR_GAZE_AMPLITUDE";
    pub const EXCHANGE_POLICY: &str = "TUTOR_EXCHANGE_POLICY";
}

/// 配置加载器
pub struct ConfigLoader<'a> {
    source: &'a dyn ConfigSource,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(source: &'a dyn ConfigSource) -> Self {
        Self { source }
    }

    /// 读取全部配置，未设置的键使用默认值
    pub fn load(&self) -> Result<AppConfig, ConfigError> {
        let mut config = AppConfig::default();

        if let Some(base) = self
            .source
            .get(keys::API_BASE)
            .or_else(|| self.source.get(keys::LEGACY_API_BASE))
        {
            config.api.base_url = base;
        }
        config.api.top_k = self.parsed::<u32>(keys::TOP_K)?;

        if let Some(Switch(enabled)) = self.parsed::<Switch>(keys::SPEECH)? {
            config.speech.enabled = enabled;
        }
        if let Some(locale) = self.source.get(keys::LOCALE) {
            config.speech.locale = locale;
        }
        config.speech.synthesizer_command = self.source.get(keys::TTS_COMMAND);
        config.speech.recognizer_command = self.source.get(keys::STT_COMMAND);

        if let Some(emotion) = self.source.get(keys::DEFAULT_EMOTION) {
            config.mascot.default_emotion = emotion;
        }
        if let Some(amplitude) = self.parsed::<f32>(keys::GAZE_AMPLITUDE)? {
            config.mascot.gaze_amplitude = amplitude;
        }

        if let Some(policy) = self.parsed::<ExchangePolicy>(keys::EXCHANGE_POLICY)? {
            config.exchange = policy;
        }

        debug!("Loaded config: {:?}", config);
        Ok(config)
    }

    fn parsed<T>(&self, key: &str) -> Result<Option<T>, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.source.get(key) {
            Some(raw) => raw
                .parse::<T>()
                .map(Some)
                .map_err(|e| ConfigError::Invalid {
                    key: key.to_string(),
                    value: raw.clone(),
                    reason: e.to_string(),
                }),
            None => Ok(None),
        }
    }
}
