// Config Domain Entities
//
// 配置领域实体定义

use serde::{Deserialize, Serialize};

use super::value_objects::ExchangePolicy;
use crate::modules::chat::domain::DEFAULT_EMOTION;
use crate::modules::speech::DEFAULT_LOCALE;

/// 本地开发环境的服务地址
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// 输入框的初始内容
pub const DEFAULT_INITIAL_INPUT: &str = "Explain a^2 + b^2 = c^2";

/// 远端服务配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
    pub base_url: String,
    /// 检索条数，未设置时交给服务端默认值
    pub top_k: Option<u32>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            top_k: None,
        }
    }
}

/// 语音配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechConfig {
    pub enabled: bool,
    pub locale: String,
    /// 语音合成命令，未设置时自动探测
    pub synthesizer_command: Option<String>,
    /// 语音识别命令，未设置时不支持语音输入
    pub recognizer_command: Option<String>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            locale: DEFAULT_LOCALE.to_string(),
            synthesizer_command: None,
            recognizer_command: None,
        }
    }
}

/// 吉祥物配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MascotConfig {
    pub default_emotion: String,
    /// 瞳孔最大偏移量
    pub gaze_amplitude: f32,
    pub initial_input: String,
}

impl Default for MascotConfig {
    fn default() -> Self {
        Self {
            default_emotion: DEFAULT_EMOTION.to_string(),
            gaze_amplitude: 8.0,
            initial_input: DEFAULT_INITIAL_INPUT.to_string(),
        }
    }
}

/// 应用完整配置
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub api: ApiConfig,
    pub speech: SpeechConfig,
    pub mascot: MascotConfig,
    pub exchange: ExchangePolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.speech.locale, "en-US");
        assert_eq!(config.mascot.default_emotion, "explaining");
        assert_eq!(config.exchange, ExchangePolicy::Concurrent);
    }
}
